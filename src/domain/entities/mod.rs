//! Domain entity definitions.

mod catalog;
mod identifiers;
mod records;
mod schedule;
mod session;
mod user_type;

pub use catalog::{Catalog, Category, CityChoice, CompanyProfile, Department, Service, ServiceKind};
pub use identifiers::{DocumentId, SubmissionKey};
pub use records::{ClientRecord, CompanyRecord, RegistrationRecord};
pub use schedule::Schedule;
pub use session::UserSession;
pub use user_type::UserType;
