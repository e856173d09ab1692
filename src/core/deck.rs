//! # Deck
//!
//! The ordered, immutable list of slides shown during a session.
//!
//! Slides are opaque to navigation: the core only ever indexes them by
//! position. A deck comes from one of two content providers:
//!
//! - the built-in deck compiled into the binary (`decks/conquete_spatiale.toml`)
//! - a deck file on disk, TOML or JSON depending on the extension
//!
//! ```toml
//! title = "My talk"
//!
//! [[slides]]
//! title = "Hello"
//! subtitle = "optional"
//! icon = "🚀"
//! content = """
//! Markdown body.
//! """
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_DECK: &str = include_str!("../../decks/conquete_spatiale.toml");

/// One unit of presented content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    /// Stable identifier. Defaults to the slide's position when omitted.
    #[serde(default)]
    pub id: Option<u32>,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            subtitle: None,
            content: content.into(),
            icon: None,
        }
    }
}

/// On-disk shape of a deck file.
#[derive(Debug, Default, Deserialize, Serialize)]
struct DeckFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slides: Vec<Slide>,
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("deck parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("deck parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported deck format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
    #[error("deck has no slides")]
    Empty,
}

/// Fixed-length, non-empty sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    slides: Vec<Slide>,
}

impl Deck {
    /// Build a deck, filling in missing slide ids with their position.
    pub fn new(title: impl Into<String>, slides: Vec<Slide>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let slides = slides
            .into_iter()
            .enumerate()
            .map(|(position, mut slide)| {
                slide.id.get_or_insert(position as u32);
                slide
            })
            .collect();
        Ok(Self {
            title: title.into(),
            slides,
        })
    }

    /// The presentation compiled into the binary.
    pub fn builtin() -> Result<Self, DeckError> {
        Self::from_toml_str(BUILTIN_DECK, "Stardeck")
    }

    pub fn from_toml_str(contents: &str, fallback_title: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(contents)?;
        Self::from_file(file, fallback_title)
    }

    pub fn from_json_str(contents: &str, fallback_title: &str) -> Result<Self, DeckError> {
        let file: DeckFile = serde_json::from_str(contents)?;
        Self::from_file(file, fallback_title)
    }

    /// Load a deck from disk. The format is picked from the file extension.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let fallback_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Stardeck")
            .to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str, &str) -> Result<Self, DeckError> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            other => return Err(DeckError::UnsupportedFormat(other.to_string())),
        };
        let contents = fs::read_to_string(path)?;
        let deck = parse(&contents, &fallback_title)?;
        info!("Loaded deck '{}' ({} slides) from {}", deck.title, deck.len(), path.display());
        Ok(deck)
    }

    fn from_file(file: DeckFile, fallback_title: &str) -> Result<Self, DeckError> {
        let title = file.title.unwrap_or_else(|| fallback_title.to_string());
        debug!("Parsed deck '{}' with {} slides", title, file.slides.len());
        Self::new(title, file.slides)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of slides. Always at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Slide> {
        self.slides.get(position)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
