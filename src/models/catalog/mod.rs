//! Service catalog.
//!
//! A fixed, ordered list of the services the shop offers together with the
//! price and rating shown on the services page, plus the featured package.
//! Built once and never mutated.

use once_cell::sync::Lazy;

use crate::models::service::Service;

/// Highest rating a service can be shown with.
pub const MAX_RATING: u8 = 5;

/// One entry of the service catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalogEntry {
    /// Catalog identifier
    pub id: &'static str,
    pub service: Service,
    /// Name shown in lists and confirmations
    pub display_name: &'static str,
    /// Price label, if the service is listed with one
    pub price: Option<&'static str>,
    /// Star rating out of [`MAX_RATING`]
    pub rating: Option<u8>,
}

impl ServiceCatalogEntry {
    fn priced(id: &'static str, service: Service, price: &'static str, rating: u8) -> Self {
        Self {
            id,
            service,
            display_name: service.display_name(),
            price: Some(price),
            rating: Some(rating.min(MAX_RATING)),
        }
    }

    fn unpriced(id: &'static str, service: Service) -> Self {
        Self {
            id,
            service,
            display_name: service.display_name(),
            price: None,
            rating: None,
        }
    }

    /// Rating rendered as filled/empty stars, e.g. "★★★★☆".
    pub fn stars(&self) -> Option<String> {
        self.rating.map(|rating| {
            (0..MAX_RATING)
                .map(|i| if i < rating { '★' } else { '☆' })
                .collect()
        })
    }
}

/// Package deal highlighted above the service list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedService {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

impl Default for FeaturedService {
    fn default() -> Self {
        Self {
            title: "💈 Featured: The Royal Treatment",
            description: "A full haircut, beard trim, hot towel, and facial — the ultimate grooming experience.",
            price: "$52",
        }
    }
}

/// Immutable, ordered sequence of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<ServiceCatalogEntry>,
    featured: FeaturedService,
}

static STANDARD_CATALOG: Lazy<ServiceCatalog> = Lazy::new(ServiceCatalog::standard);

impl ServiceCatalog {
    /// The catalog the shop ships with.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ServiceCatalogEntry::priced("1", Service::Haircut, "$5", 5),
                ServiceCatalogEntry::unpriced("2", Service::BeardTrim),
                ServiceCatalogEntry::priced("3", Service::Shave, "$3", 4),
                ServiceCatalogEntry::priced("4", Service::HairColor, "$4", 5),
                ServiceCatalogEntry::priced("5", Service::Facial, "$40", 4),
            ],
            featured: FeaturedService::default(),
        }
    }

    /// Shared instance of [`ServiceCatalog::standard`], built on first use.
    pub fn global() -> &'static ServiceCatalog {
        &STANDARD_CATALOG
    }

    /// Entries in display order.
    pub fn enumerate(&self) -> &[ServiceCatalogEntry] {
        &self.entries
    }

    pub fn featured(&self) -> &FeaturedService {
        &self.featured
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, service: Service) -> Option<&ServiceCatalogEntry> {
        self.entries.iter().find(|entry| entry.service == service)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ServiceCatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries that carry a price, i.e. the ones listed on the services page.
    pub fn priced(&self) -> impl Iterator<Item = &ServiceCatalogEntry> {
        self.entries.iter().filter(|entry| entry.price.is_some())
    }
}
