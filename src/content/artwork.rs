use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::language::LocalizedText;

use super::Record;

/// The fixed set of artwork categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Painting,
    Sculpture,
    #[serde(rename = "Digital Art")]
    DigitalArt,
    Photography,
    Philosophy,
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Painting,
        Category::Sculpture,
        Category::DigitalArt,
        Category::Photography,
        Category::Philosophy,
        Category::GraphicDesign,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Painting => "Painting",
            Category::Sculpture => "Sculpture",
            Category::DigitalArt => "Digital Art",
            Category::Photography => "Photography",
            Category::Philosophy => "Philosophy",
            Category::GraphicDesign => "Graphic Design",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Painting" => Ok(Category::Painting),
            "Sculpture" => Ok(Category::Sculpture),
            "Digital Art" => Ok(Category::DigitalArt),
            "Photography" => Ok(Category::Photography),
            "Philosophy" => Ok(Category::Philosophy),
            "Graphic Design" => Ok(Category::GraphicDesign),
            _ => Err(()),
        }
    }
}

/// A piece in the portfolio gallery.
///
/// Created by the admin pipeline, never mutated, deleted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<LocalizedText>,
    pub year: i32,
    pub category: Category,
    pub image_url: String,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl Record for Artwork {
    const COLLECTION: &'static str = "artworks";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn headline(&self) -> &str {
        self.title.default_text()
    }
}
