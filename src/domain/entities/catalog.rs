//! Directory reference data: categories, listings and business profiles.

use serde::{Deserialize, Serialize};

use super::Schedule;

/// Top-level category shown on the main menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable id.
    pub id: String,
    /// Display name, also the listing key.
    pub name: String,
    /// Opens the services sub-menu instead of a listing.
    #[serde(default)]
    pub has_subservices: bool,
}

/// Entry of the services sub-menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceKind {
    /// Stable id.
    pub id: String,
    /// Display name, also the listing key.
    pub name: String,
}

/// A business listing under a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Listing id; also the id of the business profile.
    pub id: String,
    /// Business name.
    pub name: String,
    /// Category or service the listing belongs to.
    pub category: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Current promotion.
    #[serde(default)]
    pub promo: Option<String>,
}

impl Service {
    /// Creates a listing with no rating or promotion.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            rating: 0.0,
            description: String::new(),
            promo: None,
        }
    }
}

/// Business detail page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Business id.
    pub id: String,
    /// Business name.
    pub name: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f32,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Opening hours.
    #[serde(default)]
    pub schedule: Schedule,
    /// Phone for calls.
    pub phone: String,
    /// Phone registered with WhatsApp.
    pub whatsapp: String,
    /// Gallery image names.
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// Department with its cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department name.
    pub name: String,
    /// Cities in the department.
    #[serde(default)]
    pub cities: Vec<String>,
}

/// A selectable city together with its department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityChoice {
    /// City name.
    pub city: String,
    /// Department name.
    pub department: String,
}

impl std::fmt::Display for CityChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.city, self.department)
    }
}

/// Complete reference data set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Main menu categories, in display order.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Services sub-menu entries.
    #[serde(default)]
    pub services: Vec<ServiceKind>,
    /// Business listings.
    #[serde(default)]
    pub listings: Vec<Service>,
    /// Business profiles.
    #[serde(default)]
    pub companies: Vec<CompanyProfile>,
    /// Departments and their cities.
    #[serde(default)]
    pub departments: Vec<Department>,
}

impl Catalog {
    /// Returns listings under a category or service, in catalog order.
    #[must_use]
    pub fn listings_for(&self, category: &str) -> Vec<Service> {
        self.listings
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    /// Finds a business profile by id.
    #[must_use]
    pub fn company(&self, id: &str) -> Option<&CompanyProfile> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Returns the profile of a listing, built from the listing itself when the
    /// catalog has no dedicated profile. Such profiles have no contact phones.
    #[must_use]
    pub fn profile_for(&self, listing: &Service) -> CompanyProfile {
        self.company(&listing.id).cloned().unwrap_or_else(|| CompanyProfile {
            id: listing.id.clone(),
            name: listing.name.clone(),
            rating: listing.rating,
            description: listing.description.clone(),
            schedule: Schedule::default(),
            phone: String::new(),
            whatsapp: String::new(),
            gallery: Vec::new(),
        })
    }

    /// Returns the cities of a department, empty when unknown.
    #[must_use]
    pub fn cities_for(&self, department: &str) -> &[String] {
        self.departments
            .iter()
            .find(|d| d.name == department)
            .map_or(&[], |d| d.cities.as_slice())
    }

    /// Returns every city with its department, in catalog order.
    #[must_use]
    pub fn city_choices(&self) -> Vec<CityChoice> {
        self.departments
            .iter()
            .flat_map(|d| {
                d.cities.iter().map(|city| CityChoice {
                    city: city.clone(),
                    department: d.name.clone(),
                })
            })
            .collect()
    }

    /// Returns category names usable as company types.
    #[must_use]
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}
