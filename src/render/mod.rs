//! Static HTML results pages.

use crate::models::Listing;
use crate::summary::format_dollars;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{error, info};

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

const PAGE_STYLE: &str = r#"
        .property-card { height: 100%; transition: transform 0.2s; }
        .property-card:hover { transform: translateY(-5px); }
        .property-image { height: 200px; object-fit: cover; }
        .timestamp { font-size: 0.8rem; color: #666; }
        .search-summary {
            background-color: #f8f9fa;
            border-radius: 8px;
            padding: 1rem;
            margin-bottom: 1.5rem;
            border-left: 4px solid #0d6efd;
        }"#;

/// Writes rendered result pages into a directory served under `/static`
#[derive(Debug, Clone)]
pub struct PageWriter {
    dir: PathBuf,
}

impl PageWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render and save a results page, returning its public URL.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn write(&self, listings: &[Listing], query: &str, summary: &str) -> Option<String> {
        match self.try_write(listings, query, summary).await {
            Ok(url) => {
                info!(url = %url, "Generated static page");
                Some(url)
            }
            Err(e) => {
                error!(error = %format!("{:#}", e), "Error generating static page");
                None
            }
        }
    }

    async fn try_write(&self, listings: &[Listing], query: &str, summary: &str) -> Result<String> {
        let now = Local::now();
        let filename = page_filename(query, &now);
        let html = render_page(listings, query, summary, &now);

        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.dir.join(&filename);
        tokio::fs::write(&path, html)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(format!("/static/{}", filename))
    }
}

/// Keeps generated filenames well under the 255-byte filesystem limit
const MAX_SLUG_LEN: usize = 80;

/// URL-safe slug of a query: "3 Bed Condos!" -> "3-bed-condos"
pub fn slugify(query: &str) -> String {
    let lowered = query.to_lowercase();
    let slug = NON_SLUG_CHARS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    // ASCII only after replacement, so any byte index is a char boundary
    slug[..slug.len().min(MAX_SLUG_LEN)]
        .trim_end_matches('-')
        .to_string()
}

pub fn page_filename(query: &str, now: &DateTime<Local>) -> String {
    format!("{}-{}.html", now.format("%Y%m%d-%H%M%S"), slugify(query))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full results page
pub fn render_page(
    listings: &[Listing],
    query: &str,
    summary: &str,
    now: &DateTime<Local>,
) -> String {
    let mut cards = String::new();
    for listing in listings {
        render_card(&mut cards, listing);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Real Estate Search: {query}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>{style}
    </style>
</head>
<body>
    <div class="container py-4">
        <div class="row mb-4">
            <div class="col">
                <h1 class="mb-3">Real Estate Search Results</h1>
                <div class="search-summary">
                    <p class="lead mb-0">{summary}</p>
                </div>
                <p class="timestamp">Generated on: {timestamp}</p>
            </div>
        </div>
        <div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
{cards}        </div>
    </div>
    <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#,
        query = escape_html(query),
        style = PAGE_STYLE,
        summary = escape_html(summary),
        timestamp = now.format("%B %d, %Y at %I:%M %p"),
        cards = cards,
    )
}

fn render_card(out: &mut String, listing: &Listing) {
    let image = if listing.image_url.is_empty() {
        r#"<div class="card-img-top property-image bg-light d-flex align-items-center justify-content-center">
                        <span class="text-muted">No image available</span>
                    </div>"#
            .to_string()
    } else {
        format!(
            r#"<img src="{}" class="card-img-top property-image" alt="{}">"#,
            escape_html(&listing.image_url),
            escape_html(&listing.title)
        )
    };

    let badges = if listing.features.is_empty() {
        String::new()
    } else {
        let spans: String = listing
            .features
            .iter()
            .map(|feature| {
                format!(
                    r#"<span class="badge bg-primary me-1">{}</span>"#,
                    escape_html(feature)
                )
            })
            .collect();
        format!(r#"<div class="mt-2">{}</div>"#, spans)
    };

    // Writing into a String cannot fail
    let _ = write!(
        out,
        r#"            <div class="col">
                <div class="card property-card h-100 shadow-sm">
                    {image}
                    <div class="card-body">
                        <h5 class="card-title">{title}</h5>
                        <h6 class="card-subtitle mb-2 text-primary">{price}</h6>
                        <p class="card-text text-muted">{location}</p>
                        <p class="card-text">{summary}</p>
                        {badges}
                    </div>
                </div>
            </div>
"#,
        image = image,
        title = escape_html(&listing.title),
        price = format_dollars(listing.price),
        location = escape_html(&listing.location_text),
        summary = escape_html(&listing.summary),
        badges = badges,
    );
}
