//! Scrapes a fixed set of catalog pages from the books.toscrape.com demo
//! bookstore and archives one validated JSON record per listing.
//!
//! - `normalize`: raw scraped strings to typed field values
//! - `models`: the `Book` record and its validating constructor
//! - `parser`: listing blocks in rendered HTML to records
//! - `fetcher`: rendered-page source via headless Chrome
//! - `scrape`: the sequential page loop
//! - `archiver`: newline-delimited JSON output

pub mod archiver;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod scrape;
