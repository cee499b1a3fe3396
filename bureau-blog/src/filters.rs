/// askama template filters
///
/// Route modules bring this into scope (`use crate::filters;`) so the
/// derived template code can resolve the filter functions.

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Parser};

/// Renders a timestamp as elapsed time, e.g. "4 days"
pub fn humanize(value: &DateTime<Utc>) -> askama::Result<String> {
    Ok(crate::humanize::humanize(value))
}

/// Renders Markdown to HTML
///
/// The output is markup and must be paired with `|safe` in templates.
pub fn render_markdown(value: &str) -> askama::Result<String> {
    let mut output = String::new();
    html::push_html(&mut output, Parser::new(value));
    Ok(output)
}
