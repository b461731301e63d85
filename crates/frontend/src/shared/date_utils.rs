/// Utilities for parsing dates rendered into the invoice table
///
/// Provides consistent date handling across the dashboard
use chrono::NaiveDate;

const FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a date cell or a date input value
/// Example: "2024-03-15", "2024-03-15T14:02:26Z", "03/15/2024" -> 2024-03-15
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let date_part = value.split('T').next().unwrap_or(value);
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Inclusive date window. A missing bound is open on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Empty or unparseable inputs leave that bound open
    pub fn from_inputs(from: &str, to: &str) -> Self {
        Self {
            from: parse_date(from),
            to: parse_date(to),
        }
    }

    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }

    /// Rows whose date does not parse are hidden while any bound is set
    pub fn contains_text(&self, value: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        parse_date(value).is_some_and(|date| self.contains(date))
    }
}
