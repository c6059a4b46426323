//! Turns raw scraped strings into typed field values.

use url::Url;

use crate::error::RecordError;

/// Strips the currency artifact from a price string and parses the rest.
///
/// The site serves `£` which often survives as the mojibake `Â£`, so rather
/// than matching one symbol this drops every leading character that cannot
/// start a number.
pub fn parse_price(raw: &str) -> Result<f64, RecordError> {
    let trimmed = raw.trim();
    let numeric = trimmed.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-');
    // `f64` parsing accepts `-nan` and overflow forms like `1e999`; neither is a price.
    match numeric.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RecordError::PriceFormat {
            raw: raw.to_string(),
        }),
    }
}

/// Maps the site's textual rating classes ("One".."Five") to 1..=5.
///
/// Returns 0 when no token matches; an unrecognized rating is a default,
/// not a failure.
pub fn rating_from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> u8 {
    for token in classes {
        let value = match token {
            "One" => 1,
            "Two" => 2,
            "Three" => 3,
            "Four" => 4,
            "Five" => 5,
            _ => continue,
        };
        return value;
    }
    0
}

/// Resolves a listing's relative link against the catalog base.
///
/// Catalog markup links at inconsistent depths, including a `../../../`
/// prefix; joining against the site root collapses those segments so the
/// result always starts at the base.
pub fn resolve_url(base: &Url, href: &str) -> Result<Url, url::ParseError> {
    base.join(href)
}
