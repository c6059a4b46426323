//! The sequential page loop shared by the binary and the tests.

use anyhow::{Context, Result};
use url::Url;

use crate::fetcher::PageFetcher;
use crate::parser::{self, Extraction};

/// Walks the fixed page list in order and gathers every surviving record.
///
/// Records keep page-list order, then document order within a page. A fetch
/// failure aborts the whole run; per-listing problems only bump the skip
/// count.
pub fn scrape_catalog(
    fetcher: &impl PageFetcher,
    pages: &[String],
    base: &Url,
    include_rating: bool,
) -> Result<Extraction> {
    let mut run = Extraction::default();
    for page in pages {
        let html = fetcher
            .fetch_rendered(page)
            .with_context(|| format!("fetching {page}"))?;
        let extraction = parser::extract_books(&html, base, include_rating);
        run.books.extend(extraction.books);
        run.skipped += extraction.skipped;
    }
    Ok(run)
}
