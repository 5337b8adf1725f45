//! HttpGenerator behavior against the scripted endpoint.

use atelier::{ContentKind, Generator, GeneratorError, HttpGenerator, Language, LocalizeRequest};
use serde_json::json;

use crate::fake_generator::FakeGenerator;

fn request() -> LocalizeRequest {
    LocalizeRequest {
        kind: ContentKind::Artwork,
        title: "The Mirror".into(),
        body: "a meditation on reflection".into(),
        extra: "Category: Painting, Year: 2024".into(),
    }
}

#[tokio::test]
async fn localize_parses_flat_bundle() {
    let fake = FakeGenerator::replying(
        r#"{"title": "The Mirror", "title_fr": "Le Miroir", "description": "gen"}"#,
    );
    let base = fake.start().await;
    let generator = HttpGenerator::new("test-key").with_base_url(&base);

    let bundle = generator.localize(request()).await.unwrap();
    let title = bundle.get("title").unwrap();
    assert_eq!(title.resolve(Language::Fr), "Le Miroir");
    assert_eq!(title.resolve(Language::Tr), "The Mirror");

    // the prompt carried the form input
    let prompt = fake.last_prompt().unwrap();
    assert!(prompt.contains("The Mirror"));
    assert!(prompt.contains("Category: Painting"));
}

#[tokio::test]
async fn localize_strips_markdown_fences() {
    let fake = FakeGenerator::replying("```json\n{\"title\": \"Clean\"}\n```");
    let base = fake.start().await;
    let generator = HttpGenerator::new("test-key").with_base_url(&base);

    let bundle = generator.localize(request()).await.unwrap();
    assert_eq!(bundle.get("title").unwrap().default_text(), "Clean");
}

#[tokio::test]
async fn non_ok_status_is_bad_status() {
    let fake = FakeGenerator::failing_with_status(429);
    let base = fake.start().await;
    let generator = HttpGenerator::new("test-key").with_base_url(&base);

    let err = generator.localize(request()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::BadStatus(429)));
}

#[tokio::test]
async fn envelope_without_text_is_malformed() {
    let fake = FakeGenerator::replying_raw(json!({ "candidates": [] }));
    let base = fake.start().await;
    let generator = HttpGenerator::new("test-key").with_base_url(&base);

    let err = generator.localize(request()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::Malformed(_)));
}

#[tokio::test]
async fn unparsable_generated_json_is_malformed() {
    let fake = FakeGenerator::replying("this is prose, not JSON");
    let base = fake.start().await;
    let generator = HttpGenerator::new("test-key").with_base_url(&base);

    let err = generator.localize(request()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let generator = HttpGenerator::new("test-key").with_base_url("http://127.0.0.1:1");
    let err = generator.localize(request()).await.unwrap_err();
    assert!(matches!(err, GeneratorError::Transport(_)));
}

#[tokio::test]
async fn advise_returns_plain_text() {
    let fake = FakeGenerator::replying("Publish the essay series first.");
    let base = fake.start().await;
    let generator = HttpGenerator::new("test-key").with_base_url(&base);

    let reply = generator.advise("What next?", "3 artworks").await.unwrap();
    assert_eq!(reply, "Publish the essay series first.");

    let prompt = fake.last_prompt().unwrap();
    assert!(prompt.contains("What next?"));
    assert!(prompt.contains("3 artworks"));
}
