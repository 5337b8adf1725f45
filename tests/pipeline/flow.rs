//! Full submissions: form draft → HTTP generator → store.

use atelier::{
    AdminPipeline, ArtworkDraft, Category, HttpGenerator, InMemoryCollectionStore, JournalDraft,
    Language, PipelineError, Severity, Store, SubmissionState,
};

use crate::fake_generator::FakeGenerator;

fn store() -> Store<InMemoryCollectionStore> {
    Store::new(InMemoryCollectionStore::new())
}

#[tokio::test]
async fn artwork_submission_end_to_end() {
    let fake = FakeGenerator::replying(
        r#"{
            "title": "X",
            "title_fa": "ایکس",
            "title_fr": "X (fr)",
            "description": "A study in absence.",
            "description_de": "Eine Studie."
        }"#,
    );
    let base = fake.start().await;
    let pipeline = AdminPipeline::new(HttpGenerator::new("test-key").with_base_url(&base));
    let store = store();

    let mut draft = ArtworkDraft {
        title: "X".into(),
        description: String::new(),
        category: Category::Painting,
        year: 2024,
        image_url: String::new(),
    };

    let created = pipeline
        .smart_add_artwork(&store, &mut draft)
        .await
        .unwrap()
        .unwrap();

    let artworks = store.artworks();
    assert_eq!(artworks.len(), 1);
    assert_eq!(artworks[0].title.resolve(Language::En), "X");
    assert_eq!(artworks[0].title.resolve(Language::Fa), "ایکس");
    assert_eq!(artworks[0].description.resolve(Language::De), "Eine Studie.");
    assert_eq!(artworks[0].category, Category::Painting);
    assert_eq!(artworks[0].year, 2024);
    assert_eq!(artworks[0].id, created.id);

    assert_eq!(store.log()[0].action, "Added new artwork: X");
    assert!(draft.title.is_empty());
    assert_eq!(pipeline.submission_state(), SubmissionState::Success);
}

#[tokio::test]
async fn rejected_submission_leaves_no_trace() {
    let fake = FakeGenerator::failing_with_status(500);
    let base = fake.start().await;
    let pipeline = AdminPipeline::new(HttpGenerator::new("test-key").with_base_url(&base));
    let store = store();

    let mut draft = ArtworkDraft {
        title: "X".into(),
        ..Default::default()
    };

    let result = pipeline.smart_add_artwork(&store, &mut draft).await;
    assert!(matches!(result, Err(PipelineError::Generator(_))));

    assert!(store.artworks().is_empty());
    assert_eq!(draft.title, "X");
    assert_eq!(pipeline.submission_state(), SubmissionState::Failed);

    let notes = store.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
}

#[tokio::test]
async fn journal_submission_localizes_every_field() {
    let fake = FakeGenerator::replying(
        r#"{
            "title": "On Form",
            "title_zh": "论形式",
            "excerpt": "A short look at form.",
            "content": "The essay body."
        }"#,
    );
    let base = fake.start().await;
    let pipeline = AdminPipeline::new(HttpGenerator::new("test-key").with_base_url(&base));
    let store = store();

    let mut draft = JournalDraft {
        title: "On Form".into(),
        body: "raw notes".into(),
        tags: "form,essay".into(),
    };

    let post = pipeline
        .smart_add_journal(&store, &mut draft)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(post.title.resolve(Language::Zh), "论形式");
    assert_eq!(post.content.default_text(), "The essay body.");
    assert_eq!(post.tags, vec!["form", "essay"]);
    assert_eq!(store.journal().len(), 1);
}
