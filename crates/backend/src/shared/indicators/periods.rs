use chrono::{Datelike, NaiveDate};
use contracts::shared::indicators::PeriodRange;

use crate::shared::error::{DashboardError, Result};

/// Inclusive range of order dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Quarter (1..=4) of a month (1..=12).
pub fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

fn ymd(year: i32, month: u32, day: u32, what: &str) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DashboardError::date_range(format!(
            "{what}: {year:04}-{month:02}-{day:02} is not a calendar date"
        ))
    })
}

/// Current-year to-date windows and their prior-year counterparts.
///
/// Prior-year bounds are the same month/day one year back; a bound that
/// does not exist in the calendar is an error, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodFilters {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub quarter: u32,
    pub ytd: DateWindow,
    pub qtd: DateWindow,
    pub mtd: DateWindow,
    pub lytd: DateWindow,
    pub lqtd: DateWindow,
    pub lmtd: DateWindow,
}

impl PeriodFilters {
    pub fn build(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(DashboardError::date_range(format!("month {month} out of range")));
        }
        if !(1..=31).contains(&day) {
            return Err(DashboardError::date_range(format!("day {day} out of range")));
        }

        let quarter = quarter_of(month);
        let quarter_start = (quarter - 1) * 3 + 1;
        let last_year = year - 1;

        let reference = ymd(year, month, day, "reference date")?;

        let ytd = DateWindow::new(ymd(year, 1, 1, "YTD start")?, reference);
        let qtd = DateWindow::new(ymd(year, quarter_start, 1, "QTD start")?, reference);
        let mtd = DateWindow::new(ymd(year, month, 1, "MTD start")?, reference);

        let lytd = DateWindow::new(
            ymd(last_year, 1, 1, "LYTD start")?,
            ymd(last_year, month, day, "LYTD end")?,
        );
        let lqtd = DateWindow::new(
            ymd(last_year, quarter_start, 1, "LQTD start")?,
            ymd(last_year, quarter * 3, day, "LQTD end")?,
        );
        let lmtd = DateWindow::new(
            ymd(last_year, month, 1, "LMTD start")?,
            ymd(last_year, month, day, "LMTD end")?,
        );

        Ok(Self {
            year,
            month,
            day,
            quarter,
            ytd,
            qtd,
            mtd,
            lytd,
            lqtd,
            lmtd,
        })
    }

    pub fn from_date(date: NaiveDate) -> Result<Self> {
        Self::build(date.year(), date.month(), date.day())
    }

    pub fn current(&self, range: PeriodRange) -> DateWindow {
        match range {
            PeriodRange::Ytd => self.ytd,
            PeriodRange::Qtd => self.qtd,
            PeriodRange::Mtd => self.mtd,
        }
    }

    pub fn prior(&self, range: PeriodRange) -> DateWindow {
        match range {
            PeriodRange::Ytd => self.lytd,
            PeriodRange::Qtd => self.lqtd,
            PeriodRange::Mtd => self.lmtd,
        }
    }
}
