//! Store-backed reports
//!
//! Fetches a fresh snapshot from the injected store on every call and runs
//! the pure aggregation functions over it.

use chrono::NaiveDateTime;

use crate::aggregate;
use crate::error::Result;
use crate::models::{CategoryTotal, Forecast, MonthlyOverview, OverviewFilter, TrailingTotals};
use crate::store::ExpenseStore;
use crate::timestamp::now_local;

pub struct Reports<'a, S: ExpenseStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ExpenseStore + ?Sized> Reports<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Total spend per category, all time
    pub fn category_summary(&self) -> Result<Vec<CategoryTotal>> {
        let snapshot = self.store.list_expenses()?;
        Ok(aggregate::category_totals(&snapshot))
    }

    /// Raw trailing-window sums as of `now`
    pub fn trailing_totals_at(&self, now: NaiveDateTime) -> Result<TrailingTotals> {
        let snapshot = self.store.list_expenses()?;
        Ok(aggregate::trailing_totals(&snapshot, now))
    }

    /// Forecast as of `now`
    pub fn forecast_at(&self, now: NaiveDateTime) -> Result<Forecast> {
        Ok(self.trailing_totals_at(now)?.forecast())
    }

    /// Forecast as of the current local time
    pub fn forecast(&self) -> Result<Forecast> {
        self.forecast_at(now_local())
    }

    /// Month/year overview
    pub fn monthly_overview(&self, filter: &OverviewFilter) -> Result<MonthlyOverview> {
        let snapshot = self.store.list_expenses()?;
        Ok(aggregate::monthly_overview(&snapshot, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, NewExpense};
    use crate::store::MemoryStore;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_reports_see_new_records_on_next_call() {
        let store = MemoryStore::new();
        let reports = Reports::new(&store);
        assert!(reports.category_summary().unwrap().is_empty());

        store
            .add_expense(&NewExpense::at("Tea", "Food", 3.0, now() - Duration::days(1)))
            .unwrap();
        let summary = reports.category_summary().unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total, 3.0);

        let totals = reports.trailing_totals_at(now()).unwrap();
        assert_eq!(totals.week_total, 3.0);
    }

    #[test]
    fn test_reports_over_dyn_store() {
        let store = MemoryStore::with_records(vec![
            ExpenseRecord::new(1, "a", "Food", 5.0, "2025-01-05 10:00:00"),
            ExpenseRecord::new(2, "b", "Food", 7.0, "2025-02-01 09:00:00"),
            ExpenseRecord::new(3, "c", "Food", 9.0, "not-a-date"),
        ]);
        let dyn_store: &dyn ExpenseStore = &store;
        let reports = Reports::new(dyn_store);

        assert_eq!(reports.category_summary().unwrap()[0].total, 21.0);

        let overview = reports.monthly_overview(&OverviewFilter::default()).unwrap();
        assert_eq!(overview.buckets.len(), 2);

        // The window opens Jan 11th 12:00, so only the Feb 1st record counts
        let totals = reports.trailing_totals_at(now()).unwrap();
        assert_eq!(totals.month_total, 7.0);
        assert_eq!(totals.week_total, 0.0);
        assert_eq!(reports.forecast_at(now()).unwrap().monthly, 7.0);
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let store = MemoryStore::with_records(vec![
            ExpenseRecord::new(1, "a", "Food", 5.5, "2025-02-05 10:00:00"),
            ExpenseRecord::new(2, "b", "Rent", 700.0, "2025-01-31 09:00:00"),
        ]);
        let reports = Reports::new(&store);
        let filter = OverviewFilter::new(Some("February"), None);

        assert_eq!(reports.category_summary().unwrap(), reports.category_summary().unwrap());
        assert_eq!(reports.forecast_at(now()).unwrap(), reports.forecast_at(now()).unwrap());
        assert_eq!(
            reports.monthly_overview(&filter).unwrap(),
            reports.monthly_overview(&filter).unwrap()
        );
    }
}
