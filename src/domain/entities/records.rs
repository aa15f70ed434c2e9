//! Registration records written to the document store.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserType;

/// Registration of an individual client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

impl ClientRecord {
    /// Creates a client record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Registration of a business.
///
/// The tax id (`nit`) is stored but never shown; `Debug` masks it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// Business or legal name.
    pub name: String,
    /// Tax identification number.
    pub nit: String,
    /// Contact email.
    pub email: String,
    /// Landline phone.
    pub phone_fixed: String,
    /// Mobile phone, preferably with WhatsApp.
    pub phone_cell: String,
    /// Street address.
    pub address: Option<String>,
    /// Category the business is listed under.
    #[serde(rename = "type")]
    pub kind: String,
    /// Service within the category.
    pub subtype: String,
    /// Free-form description.
    pub description: String,
    /// Additional phone numbers, in entry order.
    #[serde(default)]
    pub telefonos: Vec<String>,
}

impl CompanyRecord {
    /// Returns the masked tax id.
    #[must_use]
    pub fn masked_nit(&self) -> String {
        "*".repeat(self.nit.chars().count())
    }
}

impl fmt::Debug for CompanyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompanyRecord")
            .field("name", &self.name)
            .field("nit", &self.masked_nit())
            .field("email", &self.email)
            .field("phone_fixed", &self.phone_fixed)
            .field("phone_cell", &self.phone_cell)
            .field("address", &self.address)
            .field("kind", &self.kind)
            .field("subtype", &self.subtype)
            .field("description", &self.description)
            .field("telefonos", &self.telefonos)
            .finish()
    }
}

/// A record is exactly one of the two registration kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationRecord {
    /// Client registration.
    Client(ClientRecord),
    /// Company registration.
    Company(CompanyRecord),
}

impl RegistrationRecord {
    /// Returns the discriminant.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        match self {
            Self::Client(_) => UserType::Cliente,
            Self::Company(_) => UserType::Empresa,
        }
    }

    /// Returns the target collection.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        self.user_type().collection()
    }

    /// Returns the name used to greet the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Client(record) => &record.name,
            Self::Company(record) => &record.name,
        }
    }

    /// Serializes the record into a JSON document.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_document(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Client(record) => serde_json::to_value(record),
            Self::Company(record) => serde_json::to_value(record),
        }
    }
}

impl From<ClientRecord> for RegistrationRecord {
    fn from(record: ClientRecord) -> Self {
        Self::Client(record)
    }
}

impl From<CompanyRecord> for RegistrationRecord {
    fn from(record: CompanyRecord) -> Self {
        Self::Company(record)
    }
}
