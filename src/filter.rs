//! Case-insensitive title filtering.
//!
//! Matching is a plain substring test over lowercased titles. There is no
//! scoring and no reordering: results always follow catalog order.

use crate::catalog::Article;

/// Lowercased query reused across every title in one filter pass.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
	needle: String,
}

impl TitleMatcher {
	#[must_use]
	pub fn new(query: &str) -> Self {
		Self {
			needle: query.to_lowercase(),
		}
	}

	/// An empty needle matches every title.
	#[must_use]
	pub fn is_match_all(&self) -> bool {
		self.needle.is_empty()
	}

	#[must_use]
	pub fn matches(&self, title: &str) -> bool {
		self.is_match_all() || title.to_lowercase().contains(&self.needle)
	}
}

/// Positions of the articles whose title contains `query`, in source order.
#[must_use]
pub fn filter_indices(articles: &[Article], query: &str) -> Vec<usize> {
	let matcher = TitleMatcher::new(query);
	if matcher.is_match_all() {
		return (0..articles.len()).collect();
	}
	articles
		.iter()
		.enumerate()
		.filter(|(_, article)| matcher.matches(&article.title))
		.map(|(index, _)| index)
		.collect()
}

/// Articles whose title contains `query`, in source order.
#[must_use]
pub fn filter_articles<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
	filter_indices(articles, query)
		.into_iter()
		.map(|index| &articles[index])
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;

	fn titles<'a>(articles: &[&'a Article]) -> Vec<&'a str> {
		articles.iter().map(|article| article.title.as_str()).collect()
	}

	#[test]
	fn empty_query_returns_everything_in_order() {
		let catalog = Catalog::seeded();
		let visible = filter_articles(catalog.articles(), "");
		insta::assert_debug_snapshot!(titles(&visible), @r#"
		[
		    "Apple's WWDC 2023",
		    "Meta's Data Setup",
		    "July Fund",
		]
		"#);
	}

	#[test]
	fn meta_query_matches_one_article() {
		let catalog = Catalog::seeded();
		let visible = filter_articles(catalog.articles(), "Meta");
		assert_eq!(titles(&visible), ["Meta's Data Setup"]);
	}

	#[test]
	fn matching_ignores_case_on_both_sides() {
		let catalog = Catalog::seeded();
		assert_eq!(
			titles(&filter_articles(catalog.articles(), "wwdc")),
			["Apple's WWDC 2023"]
		);
		assert_eq!(
			titles(&filter_articles(catalog.articles(), "JULY")),
			["July Fund"]
		);
	}

	#[test]
	fn shared_substring_preserves_source_order() {
		let catalog = Catalog::new(vec![
			Article::new(9, "Zebra notes", "JAN 3, 2024", "z"),
			Article::new(4, "alpha notes", "JAN 2, 2024", "a"),
			Article::new(6, "Middle", "JAN 1, 2024", "m"),
			Article::new(1, "NOTES, final", "JAN 4, 2024", "n"),
		])
		.expect("unique ids");
		let visible = filter_articles(catalog.articles(), "Notes");
		assert_eq!(
			titles(&visible),
			["Zebra notes", "alpha notes", "NOTES, final"]
		);

		let catalog = Catalog::seeded();
		let visible = filter_articles(catalog.articles(), "'s");
		assert_eq!(titles(&visible), ["Apple's WWDC 2023", "Meta's Data Setup"]);
	}

	#[test]
	fn only_titles_are_searched() {
		let catalog = Catalog::seeded();
		// Present in the Meta article content and in the dates, never in a title.
		assert!(filter_articles(catalog.articles(), "privacy").is_empty());
		assert!(filter_articles(catalog.articles(), "JUN").is_empty());
	}

	#[test]
	fn whitespace_is_part_of_the_query() {
		let catalog = Catalog::seeded();
		assert_eq!(
			titles(&filter_articles(catalog.articles(), "y F")),
			["July Fund"]
		);
		assert!(filter_articles(catalog.articles(), " meta").is_empty());
	}

	#[test]
	fn results_are_exactly_the_matching_titles() {
		let catalog = Catalog::seeded();
		for query in ["", "a", "e", "ta", "20", "fund", "zzz", "'", "META"] {
			let needle = query.to_lowercase();
			let expected: Vec<usize> = catalog
				.articles()
				.iter()
				.enumerate()
				.filter(|(_, article)| article.title.to_lowercase().contains(&needle))
				.map(|(index, _)| index)
				.collect();
			assert_eq!(filter_indices(catalog.articles(), query), expected, "{query}");
		}
	}

	#[test]
	fn empty_catalog_yields_empty_results() {
		assert!(filter_indices(&[], "anything").is_empty());
		assert!(filter_indices(&[], "").is_empty());
	}
}
