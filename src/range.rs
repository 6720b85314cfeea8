use chrono::NaiveDate;
use thiserror::Error;

/// The only invalid-input class the date computations have: a range whose
/// start lies after its (resolved) end. There is nothing transient here, so
/// callers never retry; they drop the affected display element instead.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("range start {start} is after its end {end}")]
pub struct RangeError {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// End of a role: either a fixed date or "still ongoing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleEnd {
    On(NaiveDate),
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: RoleEnd,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: RoleEnd) -> Self {
        Self { start, end }
    }

    /// Resolves `Present` against a caller-supplied date. The clock is never
    /// read here, so every range resolved within one render pass agrees on
    /// what "now" is.
    pub fn resolve(&self, now: NaiveDate) -> (NaiveDate, NaiveDate) {
        let end = match self.end {
            RoleEnd::On(date) => date,
            RoleEnd::Present => now,
        };
        (self.start, end)
    }
}
