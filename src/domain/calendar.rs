use chrono::{Months, NaiveDate};

use crate::domain::AppError;

/// Forecast initialization anchor plus the lead-month count of the window.
///
/// The month is validated at construction, so every `CalendarSpec` in
/// circulation is arithmetically usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSpec {
    year: i32,
    month: u32,
    lead_months: u32,
}

/// Source and destination month labels of the last lead month, as `YYYYMM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadWindow {
    pub source: String,
    pub destination: String,
}

impl CalendarSpec {
    /// Create a spec for the given initialization year and month.
    pub fn new(year: i32, month: u32, lead_months: u32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidCalendarInput { month });
        }
        Ok(Self { year, month, lead_months })
    }

    /// Same anchor month and lead count for a different initialization year.
    pub fn with_year(&self, year: i32) -> CalendarSpec {
        CalendarSpec { year, ..*self }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn lead_months(&self) -> u32 {
        self.lead_months
    }

    /// Resolve the last lead month of the forecast window.
    ///
    /// The source month sits `lead_months - 1` whole months after the
    /// initialization anchor and the destination month one month after that.
    /// Both normalize to the first of the month; year boundaries roll over.
    pub fn lead_window(&self) -> Result<LeadWindow, AppError> {
        let anchor = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .ok_or(AppError::InvalidCalendarInput { month: self.month })?;

        let source = if self.lead_months == 0 {
            anchor.checked_sub_months(Months::new(1))
        } else {
            anchor.checked_add_months(Months::new(self.lead_months - 1))
        }
        .ok_or(AppError::InvalidCalendarInput { month: self.month })?;

        let destination = anchor
            .checked_add_months(Months::new(self.lead_months))
            .ok_or(AppError::InvalidCalendarInput { month: self.month })?;

        Ok(LeadWindow {
            source: source.format("%Y%m").to_string(),
            destination: destination.format("%Y%m").to_string(),
        })
    }
}
