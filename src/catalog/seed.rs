use super::Article;

const WWDC_CONTENT: &str = "\u{2022} Controlled by natural inputs such as eyes, hands, and voice, it transcends traditional displays.\n\n\u{2022} Powered by visionOS, the world's first spatial operating system, users can interact with digital content as if it were physically present in their space.";

const WWDC_THUMBNAIL: &str =
	"https://images.unsplash.com/photo-1621768216002-5ac171876625?w=300&h=300&fit=crop";

/// Built-in article set used when no catalog file is configured.
pub(super) fn articles() -> Vec<Article> {
	vec![
		Article::new(1, "Apple's WWDC 2023", "JUL 2, 2023", WWDC_CONTENT)
			.with_thumbnail(WWDC_THUMBNAIL)
			.with_time_to_read("7 min"),
		Article::new(
			2,
			"Meta's Data Setup",
			"JUN 28, 2023",
			"Comprehensive overview of Meta's latest data infrastructure and privacy measures.",
		)
		.with_time_to_read("5 min"),
		Article::new(
			3,
			"July Fund",
			"JUN 25, 2023",
			"Analysis of technology investment trends and opportunities in July 2023.",
		)
		.with_time_to_read("10 min"),
	]
}
