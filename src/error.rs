use thiserror::Error;

/// Why a single listing was dropped during extraction.
///
/// These never abort a run; the extractor skips the listing and moves on.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("listing block has no {0}")]
    MissingField(&'static str),

    #[error("price text {raw:?} is not numeric")]
    PriceFormat { raw: String },

    #[error("link {href:?} does not resolve against the catalog base")]
    BadLink { href: String },

    #[error("price {0} is negative")]
    NegativePrice(f64),

    #[error("price {0} is not a finite number")]
    NonFinitePrice(f64),

    #[error("rating {0} is outside the 0 to 5 range")]
    RatingOutOfRange(u8),
}
