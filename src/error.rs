use chrono::NaiveDate;
use thiserror::Error;

use crate::models::booking::BookingField;

/// Errors surfaced by the booking form.
///
/// None of these are fatal: `MissingFields` and `PastDate` are recovered by
/// re-prompting the user, `InvalidServiceSelection` points at a caller that
/// offered a value outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Missing fields: {}", join_fields(.0))]
    MissingFields(Vec<BookingField>),

    #[error("Invalid service selection: {0:?}")]
    InvalidServiceSelection(String),

    #[error("Appointment date {date} is before today ({today})")]
    PastDate { date: NaiveDate, today: NaiveDate },
}

fn join_fields(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, BookingError>;
