//! # Catalog
//!
//! The fixed, immutable set of artworks the gallery sells, plus the two
//! lookups every page relies on.
//!
//! ## Lookups
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  find_by_id(3)                    → Some(Nature's Whisper)              │
//! │  find_by_id(99)                   → None (absence, not an error)        │
//! │                                                                         │
//! │  find_related(3, Photography, 3)  → [Ocean Depths]                      │
//! │     same category, excluding id 3, catalog order, at most 3             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{Artwork, Category};

/// The ordered list of artworks.
///
/// Built once at startup; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Creates a catalog from an explicit list (tests, alternative data sets).
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Catalog { artworks }
    }

    /// The gallery's built-in collection.
    pub fn builtin() -> Self {
        Catalog::new(builtin_artworks())
    }

    /// All artworks, in catalog order.
    #[inline]
    pub fn all(&self) -> &[Artwork] {
        &self.artworks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Up to `limit` artworks in `category`, excluding `id`, in catalog order.
    ///
    /// No ranking and no sampling: the first matches win.
    pub fn find_related(&self, id: u32, category: Category, limit: usize) -> Vec<&Artwork> {
        self.artworks
            .iter()
            .filter(|a| a.id != id && a.category == category)
            .take(limit)
            .collect()
    }

    /// The first `count` artworks; the home page's featured strip.
    pub fn featured(&self, count: usize) -> &[Artwork] {
        &self.artworks[..count.min(self.artworks.len())]
    }

    /// Distinct categories present in the catalog, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for artwork in &self.artworks {
            if !seen.contains(&artwork.category) {
                seen.push(artwork.category);
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

// =============================================================================
// Built-in Data
// =============================================================================

const IMG_CITY: &str =
    "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=1200&h=1500&fit=crop&crop=center";
const IMG_TEXTURE: &str =
    "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=1200&h=1500&fit=crop&crop=center";
const IMG_LANDSCAPE: &str =
    "https://images.unsplash.com/photo-1578321272176-b7bbc0679853?w=1200&h=1500&fit=crop&crop=center";
const IMG_DREAMS: &str =
    "https://images.unsplash.com/photo-1549490349-8643362247b5?w=1200&h=1500&fit=crop&crop=center";

/// Positional fields of one catalog entry.
struct Seed {
    id: u32,
    title: &'static str,
    artist: &'static str,
    images: &'static [&'static str],
    category: Category,
    year: &'static str,
    price: i64,
    medium: &'static str,
    dimensions: &'static str,
    description: &'static str,
    artist_bio: &'static str,
    tags: &'static [&'static str],
    edition: &'static str,
}

impl Seed {
    fn into_artwork(self) -> Artwork {
        Artwork {
            id: self.id,
            title: self.title.to_string(),
            artist: self.artist.to_string(),
            images: self.images.iter().map(|s| s.to_string()).collect(),
            category: self.category,
            year: self.year.to_string(),
            price: Money::from_major(self.price),
            medium: self.medium.to_string(),
            dimensions: self.dimensions.to_string(),
            description: self.description.to_string(),
            artist_bio: self.artist_bio.to_string(),
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
            in_stock: true,
            edition: self.edition.to_string(),
            certificate: true,
        }
    }
}

fn builtin_artworks() -> Vec<Artwork> {
    let seeds = [
        Seed {
            id: 1,
            title: "Urban Serenity",
            artist: "Maya Chen",
            images: &[IMG_CITY, IMG_TEXTURE, IMG_LANDSCAPE],
            category: Category::Abstract,
            year: "2024",
            price: 2400,
            medium: "Acrylic on Canvas",
            dimensions: "36\" x 48\"",
            description: "Urban Serenity captures the peaceful moments found within the bustling \
                energy of city life. Through bold brushstrokes and a harmonious color palette, \
                this piece invites viewers to discover tranquility amidst urban chaos.",
            artist_bio: "Maya Chen is a contemporary abstract artist whose vibrant compositions \
                explore the intersection of urban life and natural beauty. Based in San \
                Francisco, her work has been featured in galleries across North America and \
                Europe.",
            tags: &["abstract", "urban", "contemporary", "colorful"],
            edition: "Original",
        },
        Seed {
            id: 2,
            title: "Digital Dreams",
            artist: "Alex Rivera",
            images: &[IMG_DREAMS, IMG_TEXTURE],
            category: Category::DigitalArt,
            year: "2024",
            price: 1800,
            medium: "Digital Print",
            dimensions: "24\" x 36\"",
            description: "Digital Dreams explores the intersection of technology and \
                imagination, creating ethereal landscapes that exist only in the digital realm.",
            artist_bio: "Alex Rivera is a digital artist pushing the boundaries of contemporary \
                art through innovative use of technology and digital media.",
            tags: &["digital", "contemporary", "technology"],
            edition: "Limited Edition (50)",
        },
        Seed {
            id: 3,
            title: "Nature's Whisper",
            artist: "Sophie Laurent",
            images: &[IMG_LANDSCAPE, IMG_CITY],
            category: Category::Photography,
            year: "2023",
            price: 1200,
            medium: "Fine Art Print",
            dimensions: "20\" x 30\"",
            description: "Nature's Whisper captures the delicate beauty of natural landscapes \
                through masterful photography and composition.",
            artist_bio: "Sophie Laurent is a nature photographer known for her ability to \
                capture the sublime beauty of the natural world.",
            tags: &["photography", "nature", "landscape"],
            edition: "Limited Edition (100)",
        },
        Seed {
            id: 4,
            title: "Geometric Harmony",
            artist: "David Kim",
            images: &[IMG_DREAMS, IMG_TEXTURE],
            category: Category::Contemporary,
            year: "2024",
            price: 3200,
            medium: "Mixed Media",
            dimensions: "48\" x 60\"",
            description: "Geometric Harmony explores the relationship between mathematical \
                precision and artistic expression.",
            artist_bio: "David Kim is a contemporary artist known for his geometric compositions \
                and innovative use of mixed media.",
            tags: &["geometric", "contemporary", "mixed-media"],
            edition: "Original",
        },
        Seed {
            id: 5,
            title: "Color Symphony",
            artist: "Elena Rossi",
            images: &[IMG_LANDSCAPE, IMG_CITY],
            category: Category::Abstract,
            year: "2023",
            price: 2800,
            medium: "Oil on Canvas",
            dimensions: "40\" x 50\"",
            description: "Color Symphony is a vibrant exploration of color theory and emotional \
                expression through abstract painting.",
            artist_bio: "Elena Rossi is an abstract painter whose work explores the emotional \
                power of color and form.",
            tags: &["abstract", "colorful", "oil-painting"],
            edition: "Original",
        },
        Seed {
            id: 6,
            title: "Minimalist Beauty",
            artist: "James Wilson",
            images: &[IMG_DREAMS, IMG_TEXTURE],
            category: Category::Minimalism,
            year: "2024",
            price: 1600,
            medium: "Watercolor",
            dimensions: "18\" x 24\"",
            description: "Minimalist Beauty demonstrates the power of simplicity and restraint \
                in artistic expression.",
            artist_bio: "James Wilson is a minimalist artist who finds beauty in simplicity and \
                negative space.",
            tags: &["minimalism", "watercolor", "simple"],
            edition: "Limited Edition (75)",
        },
        Seed {
            id: 7,
            title: "Steel and Light",
            artist: "Maria Rodriguez",
            images: &[IMG_LANDSCAPE, IMG_CITY],
            category: Category::Sculpture,
            year: "2024",
            price: 4500,
            medium: "Steel Sculpture",
            dimensions: "24\" x 18\" x 12\"",
            description: "Steel and Light explores the interplay between industrial materials \
                and natural illumination.",
            artist_bio: "Maria Rodriguez is a sculptor known for her innovative use of \
                industrial materials in fine art.",
            tags: &["sculpture", "steel", "industrial"],
            edition: "Original",
        },
        Seed {
            id: 8,
            title: "Ocean Depths",
            artist: "Thomas Anderson",
            images: &[IMG_DREAMS, IMG_TEXTURE],
            category: Category::Photography,
            year: "2023",
            price: 1400,
            medium: "Fine Art Print",
            dimensions: "24\" x 32\"",
            description: "Ocean Depths captures the mysterious beauty of underwater landscapes \
                and marine life.",
            artist_bio: "Thomas Anderson is an underwater photographer specializing in marine \
                conservation through art.",
            tags: &["photography", "ocean", "marine"],
            edition: "Limited Edition (60)",
        },
    ];

    seeds.into_iter().map(Seed::into_artwork).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
