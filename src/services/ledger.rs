use chrono::{Local, NaiveDate};

use crate::domain::types::DividendId;
use crate::dto::ledger::{LedgerRowDto, LedgerViewDto};
use crate::forms::dividends::{AddDividendForm, AddDividendFormPayload};
use crate::ledger::{DueStatus, Ledger, LedgerFilter, LedgerSort, aggregate};

use super::{ServiceError, ServiceResult};

/// User actions coming from the ledger controls, carrying raw input values.
#[derive(Debug, Clone)]
pub enum LedgerEvent {
    Add(AddDividendForm),
    Delete(i64),
    SetFilter(String),
    SetSort(String),
}

/// State behind the dividend ledger screen: the records plus the selected
/// filter and sort.
///
/// Events are applied one at a time through `&mut self`.
#[derive(Debug, Default)]
pub struct LedgerController {
    ledger: Ledger,
    filter: LedgerFilter,
    sort: LedgerSort,
}

impl LedgerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn filter(&self) -> LedgerFilter {
        self.filter
    }

    pub fn sort(&self) -> LedgerSort {
        self.sort
    }

    /// Applies a single UI event.
    pub fn handle(&mut self, event: LedgerEvent) -> ServiceResult<()> {
        match event {
            LedgerEvent::Add(form) => self.add_record(form).map(|_| ()),
            LedgerEvent::Delete(id) => self.delete_record(id).map(|_| ()),
            LedgerEvent::SetFilter(value) => {
                self.filter = LedgerFilter::try_from(value.as_str())?;
                Ok(())
            }
            LedgerEvent::SetSort(value) => {
                self.sort = LedgerSort::try_from(value.as_str())?;
                Ok(())
            }
        }
    }

    /// Validates the form and appends the record.
    pub fn add_record(&mut self, form: AddDividendForm) -> ServiceResult<DividendId> {
        let payload: AddDividendFormPayload = form.try_into().map_err(|e| {
            log::debug!("Rejected dividend form: {e}");
            ServiceError::from(e)
        })?;
        let ticker = payload.record.ticker.clone();
        let id = self.ledger.add_record(payload.record);
        log::info!("Added dividend {id} for {ticker}");
        Ok(id)
    }

    /// Removes a record. Unknown ids are a no-op and return `false`.
    pub fn delete_record(&mut self, id: i64) -> ServiceResult<bool> {
        let Ok(id) = DividendId::new(id) else {
            return Ok(false);
        };
        let removed = self.ledger.delete_record(id);
        if removed {
            log::info!("Deleted dividend {id}");
        } else {
            log::debug!("No dividend with id {id} to delete");
        }
        Ok(removed)
    }

    /// Builds the table rows and totals for the current filter and sort.
    pub fn view(&self, today: NaiveDate) -> LedgerViewDto {
        let projection = self.ledger.project(self.filter, self.sort);
        let summary = aggregate(projection.iter().copied());
        let rows = projection
            .into_iter()
            .map(|record| {
                LedgerRowDto::new(record, DueStatus::for_date(record.payment_date, today))
            })
            .collect();

        LedgerViewDto {
            filter: self.filter,
            sort: self.sort,
            rows,
            summary,
        }
    }

    /// [`Self::view`] relative to the local calendar date.
    pub fn view_today(&self) -> LedgerViewDto {
        self.view(Local::now().date_naive())
    }
}
