use anyhow::Result;
use recap::SessionOutcome;
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	match &outcome.selection {
		Some(article) => println!("{}\t{}", article.date, article.title),
		None => println!("No selection (query: '{}')", outcome.query),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(article) => json!({
			"id": article.id,
			"title": article.title,
			"date": article.date,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"query": outcome.query,
		"open": outcome.open,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
