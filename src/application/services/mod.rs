/// Registration form snapshots.
pub mod form_state;
/// Popup queue.
pub mod notification_manager;
/// Open badge refresh timer.
pub mod open_status;
/// Session loading state.
pub mod session_provider;

pub use form_state::{
    ClientField, ClientForm, CompanyField, CompanyForm, FormField, FormSnapshot, PhoneList,
    RegistrationForm,
};
pub use notification_manager::NotificationManager;
pub use open_status::{OPEN_STATUS_PERIOD, OpenStatusTicker};
pub use session_provider::{LoadTicket, SessionLoad, SessionProvider, SessionState};
