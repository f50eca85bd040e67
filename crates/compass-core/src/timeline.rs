//! Milestone rows for timeline charts.
//!
//! Milestone dates arrive as text. They are only parsed here, when a chart
//! is about to be drawn, and a bad value fails the whole conversion.

use chrono::NaiveDate;
use compass_models::Milestone;
use serde::Serialize;

use crate::error::{CompassError, Result};

/// Date format milestones are expected to use.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One timeline row: a milestone with parsed dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneRow {
    /// Milestone name (the category label).
    pub name: String,
    /// Owner (the colour group).
    pub owner: String,
    /// Parsed start date.
    pub start: NaiveDate,
    /// Parsed end date. Not checked against `start`.
    pub end: NaiveDate,
}

impl TryFrom<&Milestone> for MilestoneRow {
    type Error = CompassError;

    fn try_from(milestone: &Milestone) -> Result<Self> {
        Ok(Self {
            name: milestone.name.clone(),
            owner: milestone.owner.clone(),
            start: parse_date("start_date", &milestone.start_date)?,
            end: parse_date("end_date", &milestone.end_date)?,
        })
    }
}

/// Parses a `YYYY-MM-DD` date, naming `field` in the error.
///
/// The year must be exactly four digits with no sign or padding.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let invalid = || CompassError::InvalidDate {
        field,
        value: value.to_string(),
    };
    if !has_four_digit_year(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn has_four_digit_year(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes.iter().all(|b| b.is_ascii_digit() || *b == b'-')
}

/// Converts milestones into rows, preserving order.
pub fn milestone_rows(milestones: &[Milestone]) -> Result<Vec<MilestoneRow>> {
    milestones.iter().map(MilestoneRow::try_from).collect()
}
