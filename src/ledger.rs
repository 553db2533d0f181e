//! In-memory dividend ledger.
//!
//! Records live in insertion order. Display code works on a [projection]
//! (filtered and sorted borrowed view) and derives totals from it with
//! [`aggregate`].
//!
//! [projection]: Ledger::project

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dividend::{DividendRecord, NewDividendRecord};
use crate::domain::types::{AssetType, DividendId, TypeConstraintError};

/// Upper bound (inclusive) of the "due soon" window, in days.
pub const SOON_WINDOW_DAYS: i64 = 7;

/// Which records a projection keeps.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LedgerFilter {
    #[default]
    All,
    Type(AssetType),
}

impl TryFrom<&str> for LedgerFilter {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "" | "all" => Ok(Self::All),
            other => AssetType::try_from(other).map(Self::Type),
        }
    }
}

/// Ordering applied to a projection.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LedgerSort {
    /// Payment date, earliest first.
    #[default]
    Date,
    /// Yield, highest first.
    Yield,
    /// Amount, highest first.
    Amount,
}

impl TryFrom<&str> for LedgerSort {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "" | "date" => Ok(Self::Date),
            "yield" => Ok(Self::Yield),
            "amount" => Ok(Self::Amount),
            other => Err(TypeConstraintError::InvalidValue(format!("sort key: {other}"))),
        }
    }
}

/// Totals computed over a projection.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
pub struct LedgerSummary {
    pub total_amount: f64,
    /// Mean yield of the view, `0.0` when the view is empty.
    pub average_yield: f64,
    pub count: usize,
}

/// Ordered collection of dividend records.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<DividendRecord>,
    last_id: i64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[DividendRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record stamped with the current time.
    pub fn add_record(&mut self, record: NewDividendRecord) -> DividendId {
        self.add_record_at(record, Utc::now())
    }

    /// Appends a record whose id derives from `now`.
    ///
    /// Ids are strictly increasing: a record created in the same millisecond as
    /// the previous one gets the previous id plus one.
    pub fn add_record_at(&mut self, record: NewDividendRecord, now: DateTime<Utc>) -> DividendId {
        let id = DividendId::from_millis(now.timestamp_millis().max(self.last_id + 1));
        self.last_id = id.get();
        self.records.push(record.into_record(id));
        id
    }

    /// Removes the record with `id`. Returns `false` when nothing matched.
    pub fn delete_record(&mut self, id: DividendId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Filtered and sorted view over the records.
    pub fn project(&self, filter: LedgerFilter, sort: LedgerSort) -> Vec<&DividendRecord> {
        let mut view: Vec<&DividendRecord> = self
            .records
            .iter()
            .filter(|r| match filter {
                LedgerFilter::All => true,
                LedgerFilter::Type(asset_type) => r.asset_type == asset_type,
            })
            .collect();

        match sort {
            LedgerSort::Date => view.sort_unstable_by_key(|r| r.payment_date),
            LedgerSort::Yield => view.sort_unstable_by(|a, b| {
                b.yield_percent.get().total_cmp(&a.yield_percent.get())
            }),
            LedgerSort::Amount => {
                view.sort_unstable_by(|a, b| b.amount.get().total_cmp(&a.amount.get()))
            }
        }

        view
    }
}

/// Sums amounts and averages yields over `view`.
pub fn aggregate<'a, I>(view: I) -> LedgerSummary
where
    I: IntoIterator<Item = &'a DividendRecord>,
{
    let mut summary = LedgerSummary::default();
    let mut yield_sum = 0.0;
    for record in view {
        summary.total_amount += record.amount.get();
        yield_sum += record.yield_percent.get();
        summary.count += 1;
    }
    if summary.count > 0 {
        summary.average_yield = yield_sum / summary.count as f64;
    }
    summary
}

/// Signed number of days from `today` to `date`. Negative values are in the past.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Label shown next to a payment depending on how far away it is.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "days", rename_all = "snake_case")]
pub enum DueStatus {
    Paid,
    Today,
    /// Due within [`SOON_WINDOW_DAYS`].
    Soon(i64),
    InDays(i64),
}

impl DueStatus {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Paid,
            0 => Self::Today,
            d if d <= SOON_WINDOW_DAYS => Self::Soon(d),
            d => Self::InDays(d),
        }
    }

    pub fn for_date(date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days(days_until(date, today))
    }
}

impl Display for DueStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Today => write!(f, "Today"),
            Self::Soon(1) => write!(f, "Tomorrow"),
            Self::Soon(d) | Self::InDays(d) => write!(f, "{d} days"),
        }
    }
}
