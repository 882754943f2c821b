//! HTML directory listings.
//!
//! Only chart-relevant entries are listed: `.json` data files link to the
//! chart page with a `file` query parameter, `.html`/`.htm` pages link to
//! themselves. Everything else is omitted. Names are percent-encoded inside
//! links and HTML-escaped everywhere.

use std::fmt::Write as _;
use std::path::Path;

use url::{Position, Url};

use crate::error::ServerError;

/// Read `dir` and render its listing.
///
/// # Errors
/// Returns `ServerError::Io` when the directory cannot be read.
pub async fn render_directory(dir: &Path) -> Result<String, ServerError> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_owned());
        }
    }
    names.sort();
    Ok(listing_html(&names))
}

/// Render a listing page for already sorted entry names.
#[must_use]
pub fn listing_html(names: &[String]) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<body>\n<ul>\n");
    for name in names {
        let Some(href) = link_for(name) else {
            continue;
        };
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&href),
            escape(name)
        );
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

fn link_for(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    let mut url = Url::parse("http://localhost/").ok()?;
    match ext.as_str() {
        "json" => {
            url.set_path("/index.html");
            url.query_pairs_mut().append_pair("file", name);
        }
        "html" | "htm" => {
            url.path_segments_mut().ok()?.clear().push(name);
        }
        _ => return None,
    }
    Some(url[Position::BeforePath..].to_owned())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
