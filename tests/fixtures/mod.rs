// Test fixtures - reusable test data
// Shared by the integration and property tests

#![allow(dead_code)]

use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jun 1, 2025 (a Sunday)
    pub fn june_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Returns Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample drafts for testing
pub mod drafts {
    use super::*;
    use barber_booking::{BookingDraft, BookingFormController, Service};

    /// A draft with every field filled
    pub fn complete(name: &str) -> BookingDraft {
        BookingDraft {
            name: name.to_string(),
            service: Some(Service::Haircut),
            date: Some(dates::june_1_2025()),
        }
    }

    /// Controller pre-filled from a draft
    pub fn controller_with(draft: &BookingDraft) -> BookingFormController {
        let mut controller = BookingFormController::new();
        controller.set_name(draft.name.clone());
        if let Some(service) = draft.service {
            controller.set_service(service);
        }
        if let Some(date) = draft.date {
            controller.set_date(date);
        }
        controller
    }
}
