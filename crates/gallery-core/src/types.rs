//! # Domain Types
//!
//! Core domain types used throughout the Artisan Gallery storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Artwork      │   │    Category     │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  Abstract       │   │  All            │       │
//! │  │  title, artist  │   │  Digital Art    │   │  Only(Category) │       │
//! │  │  images[]       │   │  Photography    │   └─────────────────┘       │
//! │  │  price (Money)  │   │  ...            │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   ThemeMode     │   │  ImageCursor    │                              │
//! │  │  Light | Dark   │   │  preview slides │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Artworks are immutable. They are built once with the catalog and only
//! ever handed out by reference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The artwork categories the gallery sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Abstract,
    #[serde(rename = "Digital Art")]
    DigitalArt,
    Photography,
    Contemporary,
    Minimalism,
    Sculpture,
}

impl Category {
    /// Every category, in the order the gallery's filter bar lists them.
    pub const ALL: [Category; 6] = [
        Category::Abstract,
        Category::DigitalArt,
        Category::Photography,
        Category::Contemporary,
        Category::Minimalism,
        Category::Sculpture,
    ];

    /// Human-readable name, also the wire name.
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Abstract => "Abstract",
            Category::DigitalArt => "Digital Art",
            Category::Photography => "Photography",
            Category::Contemporary => "Contemporary",
            Category::Minimalism => "Minimalism",
            Category::Sculpture => "Sculpture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.name().to_string()).collect(),
            })
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The gallery's category selector: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", tag = "kind", content = "category")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Label shown on the filter button.
    pub const ALL_LABEL: &'static str = "All";

    /// Returns true if an artwork in `category` passes this filter.
    #[inline]
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// The filter bar options: "All" followed by every category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

// =============================================================================
// Artwork
// =============================================================================

/// A catalog record describing a purchasable art piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    /// Unique catalog id.
    pub id: u32,
    pub title: String,
    pub artist: String,
    /// Image URLs, first one is the cover.
    pub images: Vec<String>,
    pub category: Category,
    pub year: String,
    /// Price in whole currency units, stored as Money.
    pub price: Money,
    pub medium: String,
    pub dimensions: String,
    pub description: String,
    pub artist_bio: String,
    pub tags: Vec<String>,
    /// Informational only; the cart does not enforce it.
    pub in_stock: bool,
    /// "Original", "Limited Edition (50)", ...
    pub edition: String,
    /// Ships with a certificate of authenticity.
    pub certificate: bool,
}

impl Artwork {
    /// The cover image, if the artwork has any images.
    #[inline]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match on title or artist.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.artist.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(ValidationError::NotAllowed {
                field: "theme".to_string(),
                allowed: vec!["light".to_string(), "dark".to_string()],
            }),
        }
    }
}

// =============================================================================
// Image Cursor
// =============================================================================

/// Position in an artwork's image carousel.
///
/// `next` and `prev` wrap around both ends. A cursor over zero images stays
/// at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImageCursor {
    index: usize,
    len: usize,
}

impl ImageCursor {
    pub const fn new(len: usize) -> Self {
        ImageCursor { index: 0, len }
    }

    pub fn for_artwork(artwork: &Artwork) -> Self {
        Self::new(artwork.images.len())
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// The image under the cursor.
    pub fn current<'a>(&self, artwork: &'a Artwork) -> Option<&'a str> {
        artwork.images.get(self.index).map(String::as_str)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
