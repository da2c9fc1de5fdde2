//! Timesheet actions over an injected store.
//!
//! Every action loads the stored data, changes it and saves it back in one
//! step. Weekly reports are recalculated in full from the stored data on each
//! request; nothing derived is cached.

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tracing::info;

use crate::calculation::calculate_week;
use crate::config::OvertimePolicy;
use crate::error::EngineResult;
use crate::models::{Entry, RateConfig, TimesheetData, WeekCalculation};
use crate::store::EntryStore;

/// Records clock times and salary, and produces weekly reports.
///
/// # Example
///
/// ```
/// use overtime_engine::config::OvertimePolicy;
/// use overtime_engine::store::InMemoryStore;
/// use overtime_engine::timesheet::Timesheet;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let mut timesheet = Timesheet::new(InMemoryStore::new(), OvertimePolicy::default());
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
///
/// timesheet.set_daily_salary("800")?;
/// timesheet.clock_in(monday, NaiveTime::from_hms_opt(8, 0, 0).unwrap())?;
/// timesheet.clock_out(monday, NaiveTime::from_hms_opt(20, 0, 0).unwrap())?;
///
/// let report = timesheet.week_report(monday)?;
/// assert_eq!(report.summary.overtime_hours, Decimal::new(25, 1));
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct Timesheet<S: EntryStore> {
    store: S,
    policy: OvertimePolicy,
}

impl<S: EntryStore> Timesheet<S> {
    /// Creates a timesheet over `store` using `policy` for calculations.
    pub fn new(store: S, policy: OvertimePolicy) -> Self {
        Self { store, policy }
    }

    /// Returns the overtime policy in use.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns all recorded entries.
    pub fn entries(&self) -> EngineResult<Vec<Entry>> {
        Ok(self.store.load()?.entries)
    }

    /// Returns the salary text as entered.
    pub fn daily_salary(&self) -> EngineResult<String> {
        Ok(self.store.load()?.salary_daily)
    }

    /// Stores the daily salary text verbatim; it is parsed only when a week is calculated.
    pub fn set_daily_salary(&mut self, salary: &str) -> EngineResult<()> {
        self.update(|data| data.salary_daily = salary.to_string())
    }

    /// Starts a new record for `date` at `time`.
    ///
    /// Any existing entry for the date is replaced, including its clock-out.
    pub fn clock_in(&mut self, date: NaiveDate, time: NaiveTime) -> EngineResult<Entry> {
        let entry = Entry {
            date,
            clock_in: Some(time),
            clock_out: None,
        };
        info!(date = %date, clock_in = %time.format("%H:%M"), "Clock in");
        self.store_entry(entry)
    }

    /// Sets the clock-out for `date`, keeping an existing clock-in.
    pub fn clock_out(&mut self, date: NaiveDate, time: NaiveTime) -> EngineResult<Entry> {
        let existing = self.store.load()?.entry_for(date).cloned();
        let entry = Entry {
            date,
            clock_in: existing.and_then(|e| e.clock_in),
            clock_out: Some(time),
        };
        info!(
            date = %date,
            clock_out = %time.format("%H:%M"),
            has_clock_in = entry.clock_in.is_some(),
            "Clock out"
        );
        self.store_entry(entry)
    }

    /// Clocks in on `date` at the current local time, to the minute.
    pub fn clock_in_now(&mut self, date: NaiveDate) -> EngineResult<Entry> {
        self.clock_in(date, now_to_minute())
    }

    /// Clocks out on `date` at the current local time, to the minute.
    pub fn clock_out_now(&mut self, date: NaiveDate) -> EngineResult<Entry> {
        self.clock_out(date, now_to_minute())
    }

    /// Saves manually entered times for `date`.
    ///
    /// A supplied time overrides the stored one; an omitted time keeps
    /// whatever was stored.
    pub fn save_manual(
        &mut self,
        date: NaiveDate,
        clock_in: Option<NaiveTime>,
        clock_out: Option<NaiveTime>,
    ) -> EngineResult<Entry> {
        let existing = self.store.load()?.entry_for(date).cloned();
        let entry = Entry {
            date,
            clock_in: clock_in.or_else(|| existing.as_ref().and_then(|e| e.clock_in)),
            clock_out: clock_out.or_else(|| existing.as_ref().and_then(|e| e.clock_out)),
        };
        info!(date = %date, "Manual entry saved");
        self.store_entry(entry)
    }

    /// Deletes every entry and the salary.
    pub fn reset(&mut self) -> EngineResult<()> {
        info!("Resetting all timesheet data");
        self.store.clear()
    }

    /// Calculates the week containing `reference` from the stored data.
    pub fn week_report(&self, reference: NaiveDate) -> EngineResult<WeekCalculation> {
        let data = self.store.load()?;
        let rate = RateConfig::parse(&data.salary_daily);
        Ok(calculate_week(&data.entries, &rate, reference, &self.policy))
    }

    /// Calculates the week containing today's local date.
    pub fn current_week_report(&self) -> EngineResult<WeekCalculation> {
        self.week_report(Local::now().date_naive())
    }

    fn store_entry(&mut self, entry: Entry) -> EngineResult<Entry> {
        let stored = entry.clone();
        self.update(|data| data.upsert(entry))?;
        Ok(stored)
    }

    fn update<F>(&mut self, change: F) -> EngineResult<()>
    where
        F: FnOnce(&mut TimesheetData),
    {
        let mut data = self.store.load()?;
        change(&mut data);
        self.store.save(&data)
    }
}

/// The current local wall-clock time with seconds dropped.
fn now_to_minute() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use rust_decimal::Decimal;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn timesheet() -> Timesheet<InMemoryStore> {
        Timesheet::new(InMemoryStore::new(), OvertimePolicy::default())
    }

    // ==========================================================================
    // TS-001: clock-out keeps the clock-in
    // ==========================================================================
    #[test]
    fn test_ts_001_clock_out_keeps_clock_in() {
        let mut ts = timesheet();
        let date = make_date("2026-10-12");

        ts.clock_in(date, t(8, 0)).unwrap();
        let entry = ts.clock_out(date, t(17, 0)).unwrap();

        assert_eq!(entry.clock_in, Some(t(8, 0)));
        assert_eq!(entry.clock_out, Some(t(17, 0)));
        assert_eq!(ts.entries().unwrap(), vec![entry]);
    }

    // ==========================================================================
    // TS-002: clock-in replaces the whole entry, dropping the clock-out
    // ==========================================================================
    #[test]
    fn test_ts_002_clock_in_replaces_entry() {
        let mut ts = timesheet();
        let date = make_date("2026-10-12");

        ts.save_manual(date, Some(t(8, 0)), Some(t(17, 0))).unwrap();
        let entry = ts.clock_in(date, t(9, 0)).unwrap();

        assert_eq!(entry.clock_in, Some(t(9, 0)));
        assert_eq!(entry.clock_out, None);
        assert_eq!(ts.entries().unwrap().len(), 1);
    }

    // ==========================================================================
    // TS-003: clock-out without a clock-in records only the clock-out
    // ==========================================================================
    #[test]
    fn test_ts_003_clock_out_without_clock_in() {
        let mut ts = timesheet();
        let entry = ts.clock_out(make_date("2026-10-12"), t(17, 0)).unwrap();

        assert_eq!(entry.clock_in, None);
        assert_eq!(entry.clock_out, Some(t(17, 0)));
    }

    // ==========================================================================
    // TS-004: manual save merges supplied fields with stored ones
    // ==========================================================================
    #[test]
    fn test_ts_004_manual_save_merges() {
        let mut ts = timesheet();
        let date = make_date("2026-10-12");

        ts.clock_in(date, t(8, 0)).unwrap();
        let entry = ts.save_manual(date, None, Some(t(18, 30))).unwrap();
        assert_eq!(entry.clock_in, Some(t(8, 0)));
        assert_eq!(entry.clock_out, Some(t(18, 30)));

        let entry = ts.save_manual(date, Some(t(7, 45)), None).unwrap();
        assert_eq!(entry.clock_in, Some(t(7, 45)));
        assert_eq!(entry.clock_out, Some(t(18, 30)));

        let entry = ts.save_manual(date, None, None).unwrap();
        assert_eq!(entry.clock_in, Some(t(7, 45)));
        assert_eq!(entry.clock_out, Some(t(18, 30)));
    }

    // ==========================================================================
    // TS-005: reset clears entries and salary
    // ==========================================================================
    #[test]
    fn test_ts_005_reset_clears_everything() {
        let mut ts = timesheet();
        ts.set_daily_salary("800").unwrap();
        ts.clock_in(make_date("2026-10-12"), t(8, 0)).unwrap();

        ts.reset().unwrap();

        assert!(ts.entries().unwrap().is_empty());
        assert_eq!(ts.daily_salary().unwrap(), "");
    }

    #[test]
    fn test_other_dates_untouched() {
        let mut ts = timesheet();
        ts.save_manual(make_date("2026-10-12"), Some(t(8, 0)), Some(t(17, 0)))
            .unwrap();
        ts.clock_in(make_date("2026-10-13"), t(9, 0)).unwrap();
        ts.clock_out(make_date("2026-10-13"), t(18, 0)).unwrap();

        let entries = ts.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].clock_out, Some(t(17, 0)));
    }

    #[test]
    fn test_salary_kept_verbatim() {
        let mut ts = timesheet();
        ts.set_daily_salary(" 876,47 ").unwrap();
        assert_eq!(ts.daily_salary().unwrap(), " 876,47 ");

        let report = ts.week_report(make_date("2026-10-12")).unwrap();
        assert!(report.salary_valid);
        assert_eq!(report.daily_salary, Decimal::new(87647, 2));
    }

    #[test]
    fn test_week_report_reflects_latest_actions() {
        let mut ts = timesheet();
        let date = make_date("2026-10-17"); // Saturday
        ts.set_daily_salary("800").unwrap();
        ts.clock_in(date, t(9, 0)).unwrap();

        let open = ts.week_report(date).unwrap();
        assert_eq!(open.summary.grand_total_pay, Decimal::ZERO);

        ts.clock_out(date, t(13, 0)).unwrap();
        let closed = ts.week_report(date).unwrap();
        assert_eq!(closed.summary.base_pay, Decimal::from(1600));
    }

    #[test]
    fn test_clock_in_now_has_no_seconds() {
        let mut ts = timesheet();
        let entry = ts.clock_in_now(make_date("2026-10-12")).unwrap();
        let time = entry.clock_in.unwrap();
        assert_eq!(time.second(), 0);
        assert_eq!(time.nanosecond(), 0);
    }
}
