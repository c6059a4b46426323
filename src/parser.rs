use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::RecordError;
use crate::models::Book;
use crate::normalize;

/// One listing block on a catalog page. The fetcher also waits on this
/// selector before taking the page snapshot.
pub const LISTING_SELECTOR: &str = "article.product_pod";

/// What one page (or one whole run) yielded: the records that survived
/// validation and how many listings were dropped on the way.
#[derive(Debug, Default)]
pub struct Extraction {
    pub books: Vec<Book>,
    pub skipped: usize,
}

/// Pulls every listing out of a rendered catalog page, in document order.
///
/// Malformed listings are counted and skipped; a page without listing blocks
/// yields an empty extraction. Given the same HTML this always produces the
/// same records.
pub fn extract_books(html: &str, base: &Url, include_rating: bool) -> Extraction {
    let doc = Html::parse_document(html);
    let listing = Selector::parse(LISTING_SELECTOR).unwrap();
    let title_link = Selector::parse("h3 a").unwrap();
    let price_sel = Selector::parse(".price_color").unwrap();
    let stars = Selector::parse("p.star-rating").unwrap();

    let mut extraction = Extraction::default();
    for block in doc.select(&listing) {
        match extract_listing(block, base, include_rating, &title_link, &price_sel, &stars) {
            Ok(book) => extraction.books.push(book),
            Err(_) => extraction.skipped += 1,
        }
    }
    extraction
}

fn extract_listing(
    block: ElementRef,
    base: &Url,
    include_rating: bool,
    title_link: &Selector,
    price_sel: &Selector,
    stars: &Selector,
) -> Result<Book, RecordError> {
    let link = block
        .select(title_link)
        .next()
        .ok_or(RecordError::MissingField("title link"))?;
    let title = link
        .value()
        .attr("title")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(RecordError::MissingField("title attribute"))?;

    let price_text = block
        .select(price_sel)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or(RecordError::MissingField("price element"))?;
    let price = normalize::parse_price(&price_text)?;

    // The rating word sits in the star element's class list; a missing
    // element normalizes to 0 just like an unmatched word.
    let rating = include_rating.then(|| {
        block
            .select(stars)
            .next()
            .map(|e| normalize::rating_from_classes(e.value().classes()))
            .unwrap_or(0)
    });

    let href = link
        .value()
        .attr("href")
        .ok_or(RecordError::MissingField("href attribute"))?;
    let url = normalize::resolve_url(base, href).map_err(|_| RecordError::BadLink {
        href: href.to_string(),
    })?;

    Book::new(title.to_string(), price, rating, url.into())
}
