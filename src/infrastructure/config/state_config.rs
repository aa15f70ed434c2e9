use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// UI state kept between runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Ids of companies marked as saved.
    #[serde(default)]
    pub saved_companies: BTreeSet<String>,

    /// City picked on the main menu, as `City (Department)`.
    #[serde(default)]
    pub selected_city: Option<String>,
}

impl StateConfig {
    /// Returns true if the company is saved.
    #[must_use]
    pub fn is_saved(&self, company_id: &str) -> bool {
        self.saved_companies.contains(company_id)
    }

    /// Flips the saved flag of a company and returns the new value.
    pub fn toggle_saved(&mut self, company_id: &str) -> bool {
        if self.saved_companies.remove(company_id) {
            false
        } else {
            self.saved_companies.insert(company_id.to_string());
            true
        }
    }
}
