//! # Catalog Commands
//!
//! Browsing: the home page selection, the gallery grid with its filter bar,
//! and the artwork preview page.
//!
//! ## Gallery Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Category chips + search box                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  filter_artworks(query) ──► ArtworkQuery::apply(catalog)               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  GalleryPage { artworks: [ArtworkCard], summary: "Showing 2 ..." }     │
//! │         │                                                               │
//! │         ▼ (click a card)                                                │
//! │  open_artwork(id) ──► sleep(navigation delay) ──► ArtworkDetail        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gallery_core::{
    Artwork, ArtworkQuery, Catalog, Category, CategoryFilter, CoreError, ImageCursor, Money,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::StorefrontConfig;

/// Artwork as shown in a grid card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkCard {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub category: Category,
    pub year: String,
    pub price: Money,
    /// Cover image, empty if the artwork has none
    pub image: String,
}

impl From<&Artwork> for ArtworkCard {
    fn from(artwork: &Artwork) -> Self {
        ArtworkCard {
            id: artwork.id,
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            category: artwork.category,
            year: artwork.year.clone(),
            price: artwork.price,
            image: artwork.cover_image().unwrap_or_default().to_string(),
        }
    }
}

fn cards<'a>(artworks: impl IntoIterator<Item = &'a Artwork>) -> Vec<ArtworkCard> {
    artworks.into_iter().map(ArtworkCard::from).collect()
}

/// The gallery grid plus its result line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    pub artworks: Vec<ArtworkCard>,
    pub summary: String,
}

impl GalleryPage {
    /// The "No artworks found" state.
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

/// A filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub label: String,
    pub filter: CategoryFilter,
}

/// The preview page: one artwork, its carousel and suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetail {
    pub artwork: Artwork,
    pub images: ImageCursor,
    pub related: Vec<ArtworkCard>,
}

/// Every artwork in catalog order.
pub fn list_artworks(catalog: &Catalog) -> Vec<ArtworkCard> {
    debug!("list_artworks command");
    cards(catalog.all())
}

/// The home page selection.
pub fn featured_artworks(catalog: &Catalog, config: &StorefrontConfig) -> Vec<ArtworkCard> {
    debug!(count = config.featured_count, "featured_artworks command");
    cards(catalog.featured(config.featured_count))
}

/// Applies the gallery's category chip and search box.
///
/// ## Arguments
/// * `query` - Category filter ("All" or one category) and search text;
///   blank search matches everything
pub fn filter_artworks(catalog: &Catalog, query: &ArtworkQuery) -> GalleryPage {
    debug!(category = %query.category, search = %query.search, "filter_artworks command");

    let artworks = cards(query.apply(catalog));
    let summary = query.summary(artworks.len());
    GalleryPage { artworks, summary }
}

/// "All" followed by each category.
pub fn category_options() -> Vec<CategoryOption> {
    CategoryFilter::options()
        .into_iter()
        .map(|filter| CategoryOption {
            label: filter.to_string(),
            filter,
        })
        .collect()
}

/// Looks up one artwork with its related suggestions.
///
/// ## Errors
/// `NOT_FOUND` for an unknown id; the view sends the shopper back to the gallery.
pub fn get_artwork(
    catalog: &Catalog,
    config: &StorefrontConfig,
    artwork_id: u32,
) -> Result<ArtworkDetail, ApiError> {
    debug!(artwork_id, "get_artwork command");

    let artwork = catalog
        .find_by_id(artwork_id)
        .ok_or(CoreError::ArtworkNotFound(artwork_id))?;

    Ok(ArtworkDetail {
        images: ImageCursor::for_artwork(artwork),
        related: cards(catalog.find_related(artwork.id, artwork.category, config.related_limit)),
        artwork: artwork.clone(),
    })
}

/// Opens the preview page after the configured navigation delay.
pub async fn open_artwork(
    catalog: &Catalog,
    config: &StorefrontConfig,
    artwork_id: u32,
) -> Result<ArtworkDetail, ApiError> {
    debug!(artwork_id, delay_ms = config.navigation_delay_ms, "open_artwork command");
    tokio::time::sleep(config.navigation_delay()).await;
    get_artwork(catalog, config, artwork_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn ids(cards: &[ArtworkCard]) -> Vec<u32> {
        cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_list_and_featured() {
        let catalog = Catalog::builtin();
        let config = StorefrontConfig::default();

        assert_eq!(list_artworks(&catalog).len(), 8);
        assert_eq!(ids(&featured_artworks(&catalog, &config)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_artworks_summary() {
        let catalog = Catalog::builtin();

        let page = filter_artworks(&catalog, &ArtworkQuery::new(Category::Photography, ""));
        assert_eq!(ids(&page.artworks), vec![3, 8]);
        assert!(page.summary.starts_with("Showing 2 artworks"));

        let page = filter_artworks(&catalog, &ArtworkQuery::new(CategoryFilter::All, "zzz"));
        assert!(page.is_empty());
    }

    #[test]
    fn test_category_options() {
        let options = category_options();
        assert_eq!(options.len(), Category::ALL.len() + 1);
        assert_eq!(options[0].label, "All");
        assert_eq!(options[0].filter, CategoryFilter::All);
        assert!(options.iter().any(|o| o.label == "Digital Art"));
    }

    #[test]
    fn test_get_artwork_with_related() {
        let catalog = Catalog::builtin();
        let detail = get_artwork(&catalog, &StorefrontConfig::default(), 3).unwrap();

        assert_eq!(detail.artwork.title, "Nature's Whisper");
        assert_eq!(ids(&detail.related), vec![8]);
        assert_eq!(detail.images.index(), 0);
        assert_eq!(detail.images.len(), detail.artwork.images.len());
    }

    #[test]
    fn test_get_unknown_artwork() {
        let err = get_artwork(&Catalog::builtin(), &StorefrontConfig::default(), 99).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_artwork_waits_for_navigation_delay() {
        let catalog = Catalog::builtin();
        let config = StorefrontConfig::default();

        let started = tokio::time::Instant::now();
        let detail = open_artwork(&catalog, &config, 1).await.unwrap();
        assert_eq!(detail.artwork.id, 1);
        assert!(started.elapsed() >= config.navigation_delay());
    }
}
