// Unit tests for the Service enum and the catalog built on it

use barber_booking::models::catalog::MAX_RATING;
use barber_booking::{BookingError, Service, ServiceCatalog};
use test_case::test_case;

#[test_case("Haircut", Service::Haircut ; "haircut")]
#[test_case("Beard Trim", Service::BeardTrim ; "beard trim")]
#[test_case("Shave", Service::Shave ; "shave")]
#[test_case("Hair Color", Service::HairColor ; "hair color")]
#[test_case("Facial", Service::Facial ; "facial")]
fn test_booking_form_names_parse(input: &str, expected: Service) {
    assert_eq!(input.parse::<Service>(), Ok(expected));
}

#[test_case("" ; "empty")]
#[test_case("Beard" ; "prefix only")]
#[test_case("Hair Colour" ; "british spelling")]
fn test_unknown_names_rejected(input: &str) {
    assert_eq!(
        input.parse::<Service>(),
        Err(BookingError::InvalidServiceSelection(input.to_string()))
    );
}

#[test]
fn test_catalog_display_names_match_services() {
    for entry in ServiceCatalog::global().enumerate() {
        assert_eq!(entry.display_name, entry.service.display_name());
    }
}

#[test]
fn test_catalog_ratings_within_bounds() {
    for entry in ServiceCatalog::global().enumerate() {
        if let Some(rating) = entry.rating {
            assert!(rating <= MAX_RATING, "{} rated {}", entry.display_name, rating);
        }
    }
}

#[test]
fn test_catalog_ids_are_unique() {
    let catalog = ServiceCatalog::global();
    let mut ids: Vec<&str> = catalog.enumerate().iter().map(|entry| entry.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len());
}
