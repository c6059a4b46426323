use std::path::Path;

use anyhow::Result;
use url::Url;

use toscrape_book_archiver::fetcher::ChromeFetcher;
use toscrape_book_archiver::{archiver, parser, scrape};

const BASE_URL: &str = "https://books.toscrape.com/";
const OUTPUT_PATH: &str = "output/books.jsonl";

fn main() -> Result<()> {
    let base = Url::parse(BASE_URL)?;
    let pages = catalog_pages();

    // The browser lives exactly as long as the page loop.
    let run = {
        let fetcher = ChromeFetcher::launch(parser::LISTING_SELECTOR)?;
        scrape::scrape_catalog(&fetcher, &pages, &base, true)?
    };

    archiver::save_jsonl(&run.books, Path::new(OUTPUT_PATH))?;
    println!("Saved {} items to {}", run.books.len(), OUTPUT_PATH);
    if run.skipped > 0 {
        println!("Skipped {} malformed listings", run.skipped);
    }
    Ok(())
}

fn catalog_pages() -> Vec<String> {
    vec![
        BASE_URL.to_string(),
        format!("{BASE_URL}catalogue/page-2.html"),
    ]
}
