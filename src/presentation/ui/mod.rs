//! UI screens.

mod app;
mod company_detail_screen;
mod main_menu_screen;
mod notification_popup;
mod registration_screen;
mod service_list_screen;
mod services_menu_screen;
mod splash_screen;
mod user_type_screen;

pub use app::{App, AppServices};
pub use company_detail_screen::{CompanyDetailAction, CompanyDetailScreen, CompanyDetailView};
pub use main_menu_screen::{MainMenuAction, MainMenuScreen, MainMenuView};
pub use notification_popup::NotificationPopup;
pub use registration_screen::{RegistrationAction, RegistrationScreen, RegistrationView};
pub use service_list_screen::{ServiceListAction, ServiceListScreen, ServiceListView};
pub use services_menu_screen::{ServicesMenuAction, ServicesMenuScreen, ServicesMenuView};
pub use splash_screen::SplashScreen;
pub use user_type_screen::{UserTypeAction, UserTypeScreen, UserTypeView};
