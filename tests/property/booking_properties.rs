// Property-based tests for the booking form
// Submit behaviour over arbitrary names, services and dates

use barber_booking::{BookingDraft, Service, SubmissionResult};
use chrono::NaiveDate;
use proptest::prelude::*;

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::drafts::controller_with;

fn any_service() -> impl Strategy<Value = Service> {
    prop::sample::select(Service::ALL.to_vec())
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2020..2035i32, 1..=12u32, 1..=28u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// Property: a complete draft is accepted with the trimmed name and the
    /// controller is empty afterwards
    #[test]
    fn prop_complete_draft_accepted_and_reset(
        name in "[ \t]{0,3}[A-Za-z][A-Za-z ]{0,20}[ \t]{0,3}",
        service in any_service(),
        date in any_date(),
    ) {
        let draft = BookingDraft { name: name.clone(), service: Some(service), date: Some(date) };
        let mut controller = controller_with(&draft);

        match controller.submit() {
            SubmissionResult::Accepted(booking) => {
                prop_assert_eq!(booking.name, name.trim().to_string());
                prop_assert_eq!(booking.service, service);
                prop_assert_eq!(booking.date, date);
            }
            other => prop_assert!(false, "expected acceptance, got {:?}", other),
        }
        prop_assert!(controller.draft().is_empty());
    }

    /// Property: dropping any field makes submit reject and leaves the
    /// draft exactly as it was, however often submit is called
    #[test]
    fn prop_incomplete_draft_rejected_without_drift(
        name in "[ A-Za-z]{0,12}",
        service in prop::option::of(any_service()),
        date in prop::option::of(any_date()),
        attempts in 1..5usize,
    ) {
        let draft = BookingDraft { name, service, date };
        prop_assume!(!draft.is_complete());
        let mut controller = controller_with(&draft);

        for _ in 0..attempts {
            let result = controller.submit();
            prop_assert!(!result.is_accepted());
            prop_assert_eq!(controller.draft(), &draft);
        }
    }

    /// Property: service names and identifiers always parse back
    #[test]
    fn prop_service_names_parse(service in any_service()) {
        prop_assert_eq!(service.display_name().parse::<Service>().unwrap(), service);
        prop_assert_eq!(service.id().to_uppercase().parse::<Service>().unwrap(), service);
    }
}
