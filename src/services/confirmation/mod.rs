//! Texts shown to the user after a submit attempt.

use crate::models::booking::{Booking, SubmissionResult};
use crate::utils::date::format_date;

/// Title and body of a dialog, ready for the platform alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Confirmation body for an accepted booking.
pub fn confirmation_message(booking: &Booking, date_format: &str) -> String {
    format!(
        "Appointment booked for {} on {} for {}",
        booking.name,
        format_date(booking.date, date_format),
        booking.service.display_name()
    )
}

/// Alert for the outcome of a submit attempt.
pub fn alert_for(result: &SubmissionResult, date_format: &str) -> Alert {
    match result {
        SubmissionResult::Accepted(booking) => {
            Alert::new("Success", confirmation_message(booking, date_format))
        }
        SubmissionResult::Rejected { .. } => Alert::new("Error", "Please fill all the fields"),
    }
}
