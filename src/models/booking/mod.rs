// Booking module
// In-progress booking draft and the outcome of submitting it

use std::fmt;

use chrono::NaiveDate;

use crate::models::service::Service;

/// Reason given for every rejected submission.
pub const MISSING_FIELDS_REASON: &str = "missing fields";

/// A field of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Service,
    Date,
}

impl BookingField {
    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Service => "service",
            BookingField::Date => "date",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The booking as the user is filling it in.
///
/// The name is stored exactly as typed; trimming happens on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub service: Option<Service>,
    pub date: Option<NaiveDate>,
}

impl BookingDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields that still need a value, in form order.
    pub fn missing_fields(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(BookingField::Name);
        }
        if self.service.is_none() {
            missing.push(BookingField::Service);
        }
        if self.date.is_none() {
            missing.push(BookingField::Date);
        }
        missing
    }

    /// A draft is complete when the trimmed name is non-empty and both the
    /// service and the date are set.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// True for a freshly created (or reset) draft.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build the accepted booking, or `None` if the draft is incomplete.
    pub fn to_booking(&self) -> Option<Booking> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Booking {
            name: name.to_string(),
            service: self.service?,
            date: self.date?,
        })
    }
}

/// A validated booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Customer name, trimmed
    pub name: String,
    pub service: Service,
    pub date: NaiveDate,
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted(Booking),
    Rejected {
        reason: String,
        missing: Vec<BookingField>,
    },
}

impl SubmissionResult {
    pub(crate) fn rejected(missing: Vec<BookingField>) -> Self {
        SubmissionResult::Rejected {
            reason: MISSING_FIELDS_REASON.to_string(),
            missing,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted(_))
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            SubmissionResult::Accepted(booking) => Some(booking),
            SubmissionResult::Rejected { .. } => None,
        }
    }
}
