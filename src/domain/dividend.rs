use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AssetName, AssetType, DividendAmount, DividendId, Sector, Ticker, YieldPercent,
};

/// One dividend payment entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DividendRecord {
    pub id: DividendId,
    pub ticker: Ticker,
    pub name: AssetName,
    pub sector: Sector,
    pub asset_type: AssetType,
    pub amount: DividendAmount,
    pub yield_percent: YieldPercent,
    pub payment_date: NaiveDate,
}

/// Validated fields of a record that has not been assigned an id yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewDividendRecord {
    pub ticker: Ticker,
    pub name: AssetName,
    pub sector: Sector,
    pub asset_type: AssetType,
    pub amount: DividendAmount,
    pub yield_percent: YieldPercent,
    pub payment_date: NaiveDate,
}

impl NewDividendRecord {
    pub fn into_record(self, id: DividendId) -> DividendRecord {
        DividendRecord {
            id,
            ticker: self.ticker,
            name: self.name,
            sector: self.sector,
            asset_type: self.asset_type,
            amount: self.amount,
            yield_percent: self.yield_percent,
            payment_date: self.payment_date,
        }
    }
}
