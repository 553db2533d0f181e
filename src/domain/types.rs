//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A numeric value was NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFiniteNumber(&'static str),
    /// A text value could not be parsed as a number.
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A calendar date did not match `YYYY-MM-DD`.
    #[error("{0} must be a date in YYYY-MM-DD format")]
    InvalidDate(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Parses user supplied text into a finite `f64`.
///
/// Both `.` and `,` are accepted as the decimal separator.
pub fn parse_decimal(value: &str, field: &'static str) -> Result<f64, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString(field));
    }
    let parsed: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| TypeConstraintError::NotANumber(field))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(TypeConstraintError::NonFiniteNumber(field))
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString(field));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| TypeConstraintError::InvalidDate(field))
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_negative_f64_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Constructs a finite numeric value that is zero or greater.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if !value.is_finite() {
                    Err(TypeConstraintError::NonFiniteNumber($field))
                } else if value < 0.0 {
                    Err(TypeConstraintError::NegativeNumber($field))
                } else {
                    Ok(Self(value))
                }
            }

            /// Parses user input and applies the same constraints as [`Self::new`].
            pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
                Self::new(parse_decimal(value, $field)?)
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<f64> for $name {
            fn eq(&self, other: &f64) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(
    CatalogItemId,
    "Unique identifier for a movie or series row.",
    "item id"
);

non_empty_string_newtype!(
    ItemName,
    "Catalog item title enforcing non-empty values.",
    "name"
);
non_empty_string_newtype!(
    ImageUrl,
    "Poster location. Stored as an opaque string, not validated as a URL.",
    "image url"
);
non_empty_string_newtype!(
    VideoUrl,
    "Video location. Stored as an opaque string, not validated as a URL.",
    "video url"
);
/// Adds `from_stored` to catalog text types. Stored rows are taken verbatim:
/// only values entering through the writer are trimmed and checked.
macro_rules! stored_text {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Wraps a value read back from the store without trimming or validation.
                pub fn from_stored(value: String) -> Self {
                    Self(value)
                }
            }
        )+
    };
}

stored_text!(ItemName, ImageUrl, VideoUrl);

non_empty_string_newtype!(AssetName, "Name of the paying asset.", "name");
non_empty_string_newtype!(Sector, "Economic sector of the paying asset.", "sector");

non_negative_f64_newtype!(
    DividendAmount,
    "Non-negative payment value in currency units.",
    "amount"
);

/// Exchange ticker, trimmed and upper-cased.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Normalizes the input to uppercase and rejects empty values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "ticker")?;
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for Ticker {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Dividend yield as a percentage. Any finite value is accepted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct YieldPercent(f64);

impl YieldPercent {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonFiniteNumber("yield"))
        }
    }

    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        Self::new(parse_decimal(value, "yield")?)
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for YieldPercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a ledger record, derived from the creation timestamp in
/// milliseconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DividendId(i64);

impl DividendId {
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId("dividend id"))
        }
    }

    /// Builds an id from a millisecond timestamp, clamping pre-epoch clocks to 1.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.max(1))
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for DividendId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of asset that paid a dividend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Real-estate fund shares.
    Reit,
    /// Ordinary company shares.
    Equity,
}

impl AssetType {
    /// String representation used in forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reit => "reit",
            Self::Equity => "equity",
        }
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for AssetType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reit" | "fii" => Ok(Self::Reit),
            "equity" | "acao" | "ação" => Ok(Self::Equity),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "asset type: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for AssetType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_non_empty_strings() {
        let value = ItemName::new("  Filme Exemplo 1  ").unwrap();
        assert_eq!(value.as_str(), "Filme Exemplo 1");
    }

    #[test]
    fn stored_catalog_text_is_kept_verbatim() {
        assert_eq!(ItemName::from_stored(String::new()).as_str(), "");
        assert_eq!(
            VideoUrl::from_stored(" video.mp4 ".to_string()).as_str(),
            " video.mp4 "
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = CatalogItemId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("item id"));
    }

    #[test]
    fn media_urls_are_opaque() {
        assert!(ImageUrl::new("not-a-url").is_ok());
        assert_eq!(
            VideoUrl::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("video url")
        );
    }

    #[test]
    fn ticker_is_upper_cased() {
        assert_eq!(Ticker::new(" petr4 ").unwrap(), "PETR4");
    }

    #[test]
    fn amount_rejects_negative_and_nan() {
        assert_eq!(
            DividendAmount::new(-0.01).unwrap_err(),
            TypeConstraintError::NegativeNumber("amount")
        );
        assert_eq!(
            DividendAmount::new(f64::NAN).unwrap_err(),
            TypeConstraintError::NonFiniteNumber("amount")
        );
        assert_eq!(DividendAmount::new(0.0).unwrap().get(), 0.0);
    }

    #[test]
    fn parses_decimals_with_comma() {
        assert_eq!(DividendAmount::parse("12,50").unwrap(), 12.5);
        assert_eq!(
            YieldPercent::parse("abc").unwrap_err(),
            TypeConstraintError::NotANumber("yield")
        );
        assert_eq!(
            YieldPercent::parse("inf").unwrap_err(),
            TypeConstraintError::NonFiniteNumber("yield")
        );
    }

    #[test]
    fn yield_may_be_negative() {
        assert_eq!(YieldPercent::new(-1.5).unwrap().get(), -1.5);
    }

    #[test]
    fn parses_payment_dates() {
        assert_eq!(
            parse_date("2025-03-15", "payment date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert_eq!(
            parse_date("15/03/2025", "payment date").unwrap_err(),
            TypeConstraintError::InvalidDate("payment date")
        );
    }

    #[test]
    fn asset_type_accepts_aliases() {
        assert_eq!(AssetType::try_from("FII").unwrap(), AssetType::Reit);
        assert_eq!(AssetType::try_from("equity").unwrap(), AssetType::Equity);
        assert!(AssetType::try_from("bond").is_err());
    }
}
