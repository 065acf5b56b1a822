use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// A calendar month of a given year, the unit budgets are set against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("month must be between 1 and 12, got {}", month));
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Self {
        self.first_day()
            .checked_sub_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.first_day()
            .checked_add_months(Months::new(1))
            .map(Self::of)
            .unwrap_or(*self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn days(&self) -> u32 {
        let next = self.next().first_day();
        let days = next.signed_duration_since(self.first_day()).num_days();
        if days <= 0 { 31 } else { days as u32 }
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize + 11) % 12]
    }

    /// Short chart label, e.g. "May 2024".
    pub fn label(&self) -> String {
        format!("{} {}", &self.month_name()[..3], self.year)
    }

    /// The `count` periods ending at (and including) this one, oldest first.
    pub fn trailing(&self, count: usize) -> Vec<Period> {
        let mut periods = Vec::with_capacity(count);
        let mut cursor = *self;
        for _ in 0..count {
            periods.push(cursor);
            cursor = cursor.previous();
        }
        periods.reverse();
        periods
    }

    /// Years offered by the period picker: two back, two ahead.
    pub fn selectable_years() -> Vec<i32> {
        let current = Local::now().year();
        (current - 2..=current + 2).collect()
    }

    pub fn month_i32(&self) -> i32 {
        self.month as i32
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
