// src/record.rs
// =============================================================================
// The normalized, typed form of one book from the catalogue.
//
// A BookRecord is built once per listing item by the extractor and never
// changes afterwards. Nothing here checks collection-wide rules (unique urls,
// expected count); that happens in report::validate once the crawl is done.
// =============================================================================

use std::str::FromStr;

use url::Url;

use crate::error::ExtractError;

/// Star rating as the site encodes it: a class name from a closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn stars(self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }
}

impl FromStr for Rating {
    type Err = ExtractError;

    // Exact match only: "three" or "Three " are not ratings.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "One" => Ok(Rating::One),
            "Two" => Ok(Rating::Two),
            "Three" => Ok(Rating::Three),
            "Four" => Ok(Rating::Four),
            "Five" => Ok(Rating::Five),
            other => Err(ExtractError::UnknownRating(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    /// Always >= 0: the extractor only accepts unsigned digits.
    pub price: f64,
    pub rating: Rating,
    pub in_stock: bool,
    pub url: Url,
}

impl BookRecord {
    pub const IN_STOCK: &'static str = "In stock";
    pub const OUT_OF_STOCK: &'static str = "Out of stock";

    /// Literal token written to the output file for the availability column.
    pub fn availability(&self) -> &'static str {
        if self.in_stock {
            Self::IN_STOCK
        } else {
            Self::OUT_OF_STOCK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_vocabulary_is_total() {
        let tokens = ["One", "Two", "Three", "Four", "Five"];
        for (i, token) in tokens.iter().enumerate() {
            let parsed: Rating = token.parse().unwrap();
            assert_eq!(parsed, Rating::ALL[i]);
            assert_eq!(parsed.stars() as usize, i + 1);
        }
    }

    #[test]
    fn test_rating_three() {
        assert_eq!("Three".parse::<Rating>().unwrap().stars(), 3);
    }

    #[test]
    fn test_rating_rejects_unknown_tokens() {
        for token in ["Sixish", "three", "THREE", " Three", "", "5", "star-rating"] {
            assert_eq!(
                token.parse::<Rating>(),
                Err(ExtractError::UnknownRating(token.to_string()))
            );
        }
    }

    #[test]
    fn test_availability_tokens() {
        let mut record = BookRecord {
            title: "Sharp Objects".to_string(),
            price: 47.82,
            rating: Rating::Four,
            in_stock: true,
            url: Url::parse("https://books.toscrape.com/catalogue/sharp-objects_997/index.html")
                .unwrap(),
        };
        assert_eq!(record.availability(), "In stock");
        record.in_stock = false;
        assert_eq!(record.availability(), "Out of stock");
    }
}
