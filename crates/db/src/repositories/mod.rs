//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod agency;
pub mod calendar;
pub mod document;
pub mod error;
pub mod history;
pub mod notification;
pub mod property;
pub mod realtor;
pub mod stats;
pub mod training;

pub use agency::AgencyRepository;
pub use calendar::CalendarRepository;
pub use document::DocumentRepository;
pub use error::RepositoryError;
pub use history::HistoryRepository;
pub use notification::NotificationRepository;
pub use property::PropertyRepository;
pub use realtor::{CreateRealtorInput, RealtorRepository};
pub use stats::StatsRepository;
pub use training::{CreateTrainingEventInput, RegistrationOutcome, TrainingRepository};
