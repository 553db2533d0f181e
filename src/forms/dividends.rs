use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::dividend::NewDividendRecord;
use crate::domain::types::{
    AssetName, AssetType, DividendAmount, Sector, Ticker, TypeConstraintError, YieldPercent,
    parse_date,
};

/// Raw values of the "add dividend" form, exactly as the inputs hold them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddDividendForm {
    #[validate(length(min = 1, max = 12))]
    pub ticker: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub sector: String,
    #[validate(length(min = 1))]
    pub asset_type: String,
    #[validate(length(min = 1))]
    pub amount: String,
    #[validate(length(min = 1))]
    pub yield_percent: String,
    #[validate(length(min = 1))]
    pub payment_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddDividendFormPayload {
    pub record: NewDividendRecord,
}

#[derive(Debug, Error)]
pub enum AddDividendFormError {
    #[error("Add dividend form validation failed: {0}")]
    Validation(String),
    #[error("Add dividend form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddDividendFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddDividendFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddDividendForm> for AddDividendFormPayload {
    type Error = AddDividendFormError;

    fn try_from(value: AddDividendForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            record: NewDividendRecord {
                ticker: Ticker::new(value.ticker)?,
                name: AssetName::new(value.name)?,
                sector: Sector::new(value.sector)?,
                asset_type: AssetType::try_from(value.asset_type)?,
                amount: DividendAmount::parse(&value.amount)?,
                yield_percent: YieldPercent::parse(&value.yield_percent)?,
                payment_date: parse_date(&value.payment_date, "payment date")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled() -> AddDividendForm {
        AddDividendForm {
            ticker: " mxrf11 ".to_string(),
            name: "Maxi Renda".to_string(),
            sector: "Papel".to_string(),
            asset_type: "reit".to_string(),
            amount: "10,25".to_string(),
            yield_percent: "12.4".to_string(),
            payment_date: "2025-07-15".to_string(),
        }
    }

    #[test]
    fn converts_valid_form() {
        let payload: AddDividendFormPayload = filled().try_into().unwrap();
        let record = payload.record;
        assert_eq!(record.ticker, "MXRF11");
        assert_eq!(record.asset_type, AssetType::Reit);
        assert_eq!(record.amount, 10.25);
        assert_eq!(record.yield_percent.get(), 12.4);
        assert_eq!(
            record.payment_date,
            NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let form = AddDividendForm {
            sector: String::new(),
            ..filled()
        };
        let err = AddDividendFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, AddDividendFormError::Validation(_)));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let form = AddDividendForm {
            amount: "ten".to_string(),
            ..filled()
        };
        let err = AddDividendFormPayload::try_from(form).unwrap_err();
        assert!(matches!(err, AddDividendFormError::TypeConstraint(_)));
        assert!(err.to_string().contains("amount must be a number"));
    }

    #[test]
    fn rejects_blank_name_after_trimming() {
        let form = AddDividendForm {
            name: "   ".to_string(),
            ..filled()
        };
        assert!(AddDividendFormPayload::try_from(form).is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        let form = AddDividendForm {
            payment_date: "15/07/2025".to_string(),
            ..filled()
        };
        let err = AddDividendFormPayload::try_from(form).unwrap_err();
        assert!(err.to_string().contains("payment date"));
    }
}
