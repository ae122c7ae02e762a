//! Clock Port - source of the document date.

use chrono::NaiveDate;

/// Port for reading today's calendar date.
///
/// Injected so document output is reproducible in tests.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
