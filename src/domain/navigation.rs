//! Screen routes emitted by the core; routing itself lives in the UI.

use super::entities::{Category, UserType};

/// Navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Choose between client and business.
    UserTypeSelection,
    /// Registration form for the given user type.
    Registration(UserType),
    /// Category menu, carrying the registered user type.
    MainMenu {
        /// User type chosen at the start of the flow.
        user_type: UserType,
    },
    /// Sub-menu of service trades.
    ServicesMenu,
    /// Listings of one category or service.
    ServiceList {
        /// Category or service name.
        category: String,
    },
    /// Business detail page.
    CompanyDetail {
        /// Business id.
        company_id: String,
    },
}

impl Route {
    /// Returns the route opened when a main menu category is chosen.
    #[must_use]
    pub fn for_category(category: &Category) -> Self {
        if category.has_subservices {
            Self::ServicesMenu
        } else {
            Self::ServiceList {
                category: category.name.clone(),
            }
        }
    }
}
