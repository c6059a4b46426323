use serde::{Serialize, Deserialize};

use crate::error::RecordError;

/// One validated catalog listing. Immutable once built; serialized as a
/// single JSON line. `rating` is omitted from the output when the run does
/// not scrape star ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub url: String,
}

impl Book {
    /// Builds a record, rejecting impossible fields instead of storing them.
    pub fn new(
        title: String,
        price: f64,
        rating: Option<u8>,
        url: String,
    ) -> Result<Self, RecordError> {
        // A NaN price passes `price < 0.0` and serde_json would archive it as null.
        if !price.is_finite() {
            return Err(RecordError::NonFinitePrice(price));
        }
        if price < 0.0 {
            return Err(RecordError::NegativePrice(price));
        }
        if let Some(r) = rating {
            if r > 5 {
                return Err(RecordError::RatingOutOfRange(r));
            }
        }
        Ok(Self {
            title,
            price,
            rating,
            url,
        })
    }
}
