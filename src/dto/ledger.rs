use serde::Serialize;

use crate::domain::dividend::DividendRecord;
use crate::ledger::{DueStatus, LedgerFilter, LedgerSort, LedgerSummary};

/// One table row of the ledger view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerRowDto {
    pub id: i64,
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub asset_type: &'static str,
    pub amount: f64,
    pub yield_percent: f64,
    pub payment_date: String,
    pub due: DueStatus,
    pub due_label: String,
}

impl LedgerRowDto {
    pub fn new(record: &DividendRecord, due: DueStatus) -> Self {
        Self {
            id: record.id.get(),
            ticker: record.ticker.to_string(),
            name: record.name.to_string(),
            sector: record.sector.to_string(),
            asset_type: record.asset_type.as_str(),
            amount: record.amount.get(),
            yield_percent: record.yield_percent.get(),
            payment_date: record.payment_date.format("%Y-%m-%d").to_string(),
            due,
            due_label: due.to_string(),
        }
    }
}

/// Everything the ledger table and its footer display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerViewDto {
    pub filter: LedgerFilter,
    pub sort: LedgerSort,
    pub rows: Vec<LedgerRowDto>,
    pub summary: LedgerSummary,
}
