//! # Catalog Filtering
//!
//! The gallery page's category buttons and search box, as a pure predicate.
//!
//! An artwork matches when both hold:
//! - the category filter is `All`, or equals the artwork's category
//! - the search text is empty, or is a case-insensitive substring of the
//!   artwork's title or artist
//!
//! Filtering is one pass over the catalog and keeps catalog order.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::types::{Artwork, CategoryFilter};

/// What the shopper has selected on the gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub search: String,
}

impl ArtworkQuery {
    pub fn new(category: impl Into<CategoryFilter>, search: impl Into<String>) -> Self {
        ArtworkQuery {
            category: category.into(),
            search: search.into(),
        }
    }

    /// Everything, unfiltered.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.matcher()(artwork)
    }

    /// Runs the query over the catalog, preserving catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Artwork> {
        let matches = self.matcher();
        catalog.all().iter().filter(|a| matches(*a)).collect()
    }

    /// The line above the results grid, e.g.
    /// `Showing 2 artworks in Photography matching "ocean"`.
    pub fn summary(&self, count: usize) -> String {
        let mut line = format!(
            "Showing {} artwork{}",
            count,
            if count == 1 { "" } else { "s" }
        );
        if let CategoryFilter::Only(category) = self.category {
            line.push_str(&format!(" in {}", category));
        }
        if !self.search.is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.search));
        }
        line
    }

    /// Lowercases the search text once, not once per artwork.
    fn matcher(&self) -> impl Fn(&Artwork) -> bool + '_ {
        let needle = self.search.to_lowercase();
        move |artwork: &Artwork| {
            self.category.admits(artwork.category) && (needle.is_empty() || artwork.mentions(&needle))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn ids(results: &[&Artwork]) -> Vec<u32> {
        results.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_unfiltered_returns_whole_catalog_in_order() {
        let catalog = Catalog::builtin();
        let results = ArtworkQuery::all().apply(&catalog);
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_category_only() {
        let catalog = Catalog::builtin();
        let photography = ArtworkQuery::new(Category::Photography, "").apply(&catalog);
        assert_eq!(ids(&photography), vec![3, 8]);

        let abstract_art = ArtworkQuery::new(Category::Abstract, "").apply(&catalog);
        assert_eq!(ids(&abstract_art), vec![1, 5]);
        assert!(abstract_art.iter().all(|a| a.category == Category::Abstract));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_artist() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ids(&ArtworkQuery::new(CategoryFilter::All, "OCEAN").apply(&catalog)),
            vec![8]
        );
        assert_eq!(
            ids(&ArtworkQuery::new(CategoryFilter::All, "maya").apply(&catalog)),
            vec![1]
        );
        // "an" hits Urban Serenity, Steel and Light and Thomas Anderson
        assert_eq!(
            ids(&ArtworkQuery::new(CategoryFilter::All, "an").apply(&catalog)),
            vec![1, 7, 8]
        );
    }

    #[test]
    fn test_search_does_not_look_at_tags_or_description() {
        let catalog = Catalog::builtin();
        assert!(ArtworkQuery::new(CategoryFilter::All, "industrial")
            .apply(&catalog)
            .is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        let catalog = Catalog::builtin();
        let query = ArtworkQuery::new(Category::Photography, "sophie");
        assert_eq!(ids(&query.apply(&catalog)), vec![3]);

        let query = ArtworkQuery::new(Category::Sculpture, "sophie");
        assert!(query.apply(&catalog).is_empty());
    }

    #[test]
    fn test_summary() {
        assert_eq!(ArtworkQuery::all().summary(8), "Showing 8 artworks");
        assert_eq!(
            ArtworkQuery::new(Category::Photography, "").summary(2),
            "Showing 2 artworks in Photography"
        );
        assert_eq!(
            ArtworkQuery::new(CategoryFilter::All, "ocean").summary(1),
            "Showing 1 artwork matching \"ocean\""
        );
    }
}
