// Barber Booking Library
// Booking form, service catalog and shop content

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::BookingError;
pub use models::booking::{Booking, BookingDraft, BookingField, SubmissionResult};
pub use models::catalog::{ServiceCatalog, ServiceCatalogEntry};
pub use models::service::Service;
pub use services::booking::BookingFormController;
