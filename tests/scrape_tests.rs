use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use url::Url;

use toscrape_book_archiver::archiver::save_jsonl;
use toscrape_book_archiver::fetcher::PageFetcher;
use toscrape_book_archiver::models::Book;
use toscrape_book_archiver::scrape::scrape_catalog;

const BASE: &str = "https://books.toscrape.com/";
const RATING_WORDS: [&str; 5] = ["One", "Two", "Three", "Four", "Five"];

struct StaticSite {
    pages: HashMap<String, String>,
}

impl PageFetcher for StaticSite {
    fn fetch_rendered(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("unknown page {url}"))
    }
}

/// A catalog page shaped like the live site: 20 `article.product_pod` blocks
/// inside an `ol.row`, numbered from `first_index`.
fn catalog_page(first_index: usize) -> String {
    let listings: String = (first_index..first_index + 20)
        .map(|i| {
            let word = RATING_WORDS[i % RATING_WORDS.len()];
            format!(
                r#"<li><article class="product_pod">
                    <div class="image_container">
                        <a href="catalogue/book-{i}_1000/index.html"><img src="media/{i}.jpg" alt="Book {i}"/></a>
                    </div>
                    <p class="star-rating {word}"></p>
                    <h3><a href="catalogue/book-{i}_1000/index.html" title="Book {i}">Book {i}</a></h3>
                    <div class="product_price">
                        <p class="price_color">Â£{i}.99</p>
                        <p class="instock availability">In stock</p>
                    </div>
                </article></li>"#
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html><html lang="en-us"><body>
            <section><ol class="row">{listings}</ol></section>
        </body></html>"#
    )
}

fn two_page_site() -> (StaticSite, Vec<String>) {
    let pages = vec![BASE.to_string(), format!("{BASE}catalogue/page-2.html")];
    let site = StaticSite {
        pages: HashMap::from([
            (pages[0].clone(), catalog_page(1)),
            (pages[1].clone(), catalog_page(21)),
        ]),
    };
    (site, pages)
}

fn scratch_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("toscrape_e2e_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&p);
    p.push("output");
    p.push("books.jsonl");
    p
}

#[test]
fn two_pages_of_twenty_listings_yield_forty_ordered_records() {
    let (site, pages) = two_page_site();
    let base = Url::parse(BASE).unwrap();

    let run = scrape_catalog(&site, &pages, &base, true).unwrap();

    assert_eq!(run.books.len(), 40);
    assert_eq!(run.skipped, 0);
    for (i, book) in run.books.iter().enumerate() {
        // page-list order, then document order within each page
        assert_eq!(book.title, format!("Book {}", i + 1));
        assert!(book.price >= 0.0);
        assert!(book.url.starts_with(BASE), "relative url {}", book.url);
        assert!(!book.url.contains("../"));
        let rating = book.rating.expect("rating variant scrapes stars");
        assert!((1..=5u8).contains(&rating));
    }
}

#[test]
fn the_no_rating_variant_omits_the_field_end_to_end() {
    let (site, pages) = two_page_site();
    let base = Url::parse(BASE).unwrap();

    let run = scrape_catalog(&site, &pages, &base, false).unwrap();

    assert_eq!(run.books.len(), 40);
    assert!(run.books.iter().all(|b| b.rating.is_none()));

    let path = scratch_file("no_rating");
    save_jsonl(&run.books, &path).unwrap();
    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("rating"));
}

#[test]
fn rescraping_the_same_site_is_idempotent() {
    let (site, pages) = two_page_site();
    let base = Url::parse(BASE).unwrap();

    let first = scrape_catalog(&site, &pages, &base, true).unwrap();
    let second = scrape_catalog(&site, &pages, &base, true).unwrap();

    assert_eq!(first.books, second.books);
    assert_eq!(first.skipped, second.skipped);
}

#[test]
fn the_archive_holds_one_parseable_line_per_record() {
    let (site, pages) = two_page_site();
    let base = Url::parse(BASE).unwrap();
    let run = scrape_catalog(&site, &pages, &base, true).unwrap();

    let path = scratch_file("archive");
    save_jsonl(&run.books, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let restored: Vec<Book> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(restored, run.books);
}

#[test]
fn a_page_missing_from_the_site_fails_the_whole_run() {
    let (site, _) = two_page_site();
    let base = Url::parse(BASE).unwrap();
    let pages = vec![
        BASE.to_string(),
        format!("{BASE}catalogue/page-9999.html"),
    ];

    let err = scrape_catalog(&site, &pages, &base, true).unwrap_err();
    assert!(err.to_string().contains("page-9999"));
}
