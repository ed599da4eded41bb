//! Booking form controller.
//!
//! Owns the draft for one booking screen, applies field edits and turns a
//! submit into either an accepted [`Booking`] or a rejection listing the
//! missing fields. Everything is synchronous; nothing is persisted.

use chrono::NaiveDate;

use crate::error::{BookingError, Result};
use crate::models::booking::{Booking, BookingDraft, BookingField, SubmissionResult};
use crate::models::service::Service;
use crate::utils::date::is_past;

/// Holds the in-progress booking for a single screen instance.
#[derive(Debug, Default)]
pub struct BookingFormController {
    draft: BookingDraft,
}

impl BookingFormController {
    /// Create a controller with an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft, for rendering field values and validity hints.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Replace the name exactly as typed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        log::debug!("Booking name set ({} chars)", self.draft.name.chars().count());
    }

    /// Replace the service; repeating the same choice changes nothing.
    pub fn set_service(&mut self, service: Service) {
        self.draft.service = Some(service);
        log::debug!("Booking service set to {}", service.id());
    }

    /// Select a service from untyped input (display name or identifier).
    ///
    /// An unknown value leaves the draft untouched.
    pub fn select_service(&mut self, choice: &str) -> Result<Service> {
        let service = choice.parse::<Service>().map_err(|err| {
            log::warn!("Rejected service selection {:?}", choice);
            err
        })?;
        self.set_service(service);
        Ok(service)
    }

    /// Replace the date. The date picker only offers today or later, so no
    /// check happens here; see [`Self::set_date_checked`].
    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = Some(date);
        log::debug!("Booking date set to {}", date);
    }

    /// Replace the date, refusing days before `today`.
    pub fn set_date_checked(&mut self, date: NaiveDate, today: NaiveDate) -> Result<()> {
        if is_past(date, today) {
            log::warn!("Rejected past booking date {} (today is {})", date, today);
            return Err(BookingError::PastDate { date, today });
        }
        self.set_date(date);
        Ok(())
    }

    /// Unset the date, keeping the other fields.
    pub fn clear_date(&mut self) {
        self.draft.date = None;
    }

    /// Discard the draft, e.g. when the user leaves the screen.
    pub fn reset(&mut self) {
        self.draft = BookingDraft::default();
    }

    /// Whether a submit right now would be accepted.
    pub fn is_complete(&self) -> bool {
        self.draft.is_complete()
    }

    /// Fields a submit right now would report as missing.
    pub fn missing_fields(&self) -> Vec<BookingField> {
        self.draft.missing_fields()
    }

    /// Submit the draft.
    ///
    /// An incomplete draft is rejected and kept as is. A complete one is
    /// accepted with the trimmed name and the draft starts over empty.
    pub fn submit(&mut self) -> SubmissionResult {
        match self.draft.to_booking() {
            Some(booking) => {
                log::info!(
                    "Booking accepted: {} on {}",
                    booking.service.id(),
                    booking.date
                );
                self.reset();
                SubmissionResult::Accepted(booking)
            }
            None => {
                let missing = self.draft.missing_fields();
                log::warn!("Booking rejected, missing {:?}", missing);
                SubmissionResult::rejected(missing)
            }
        }
    }

    /// [`Self::submit`] for callers that prefer `?`.
    pub fn submit_checked(&mut self) -> Result<Booking> {
        match self.submit() {
            SubmissionResult::Accepted(booking) => Ok(booking),
            SubmissionResult::Rejected { missing, .. } => Err(BookingError::MissingFields(missing)),
        }
    }
}
