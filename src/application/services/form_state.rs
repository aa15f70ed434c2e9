//! Copy-on-write registration form state.
//!
//! Every edit returns a new snapshot and leaves the previous one untouched,
//! so a screen can keep the last submitted snapshot for resubmission while
//! the user keeps typing.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::domain::entities::{
    ClientRecord, CompanyRecord, RegistrationRecord, SubmissionKey, UserType,
};
use crate::domain::errors::FormError;

/// A named attribute of a registration form.
pub trait FormField: Copy + Ord + Debug + Send + Sync + 'static {
    /// Every field, in display order.
    const ALL: &'static [Self];

    /// Wire name of the field.
    fn key(self) -> &'static str;

    /// Label shown next to the input.
    fn label(self) -> &'static str;

    /// Whether the value must be masked on screen.
    fn is_secret(self) -> bool {
        false
    }

    /// Looks a field up by wire name.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }
}

/// Client form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum ClientField {
    Name,
    Email,
    Phone,
}

impl FormField for ClientField {
    const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Phone];

    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre completo",
            Self::Email => "Email",
            Self::Phone => "Teléfono",
        }
    }
}

/// Company form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum CompanyField {
    Name,
    Nit,
    Email,
    PhoneFixed,
    PhoneCell,
    Address,
    Type,
    Subtype,
    Description,
}

impl FormField for CompanyField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Nit,
        Self::Email,
        Self::PhoneFixed,
        Self::PhoneCell,
        Self::Address,
        Self::Type,
        Self::Subtype,
        Self::Description,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Nit => "nit",
            Self::Email => "email",
            Self::PhoneFixed => "phoneFixed",
            Self::PhoneCell => "phoneCell",
            Self::Address => "address",
            Self::Type => "type",
            Self::Subtype => "subtype",
            Self::Description => "description",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre de la empresa o razón social",
            Self::Nit => "NIT (Este dato no será mostrado al público)",
            Self::Email => "Email",
            Self::PhoneFixed => "Teléfono fijo",
            Self::PhoneCell => "Teléfono celular (Preferiblemente con WhatsApp)",
            Self::Address => "Dirección (Opcional)",
            Self::Type => "Tipo de empresa",
            Self::Subtype => "Servicio que ofrece",
            Self::Description => "Descripción",
        }
    }

    fn is_secret(self) -> bool {
        matches!(self, Self::Nit)
    }
}

/// Immutable snapshot of field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot<F: FormField> {
    values: Arc<BTreeMap<F, String>>,
}

impl<F: FormField> FormSnapshot<F> {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(BTreeMap::new()),
        }
    }

    /// Returns a new snapshot with one field replaced.
    #[must_use]
    pub fn set_field(&self, field: F, value: impl Into<String>) -> Self {
        let mut values = Arc::clone(&self.values);
        Arc::make_mut(&mut values).insert(field, value.into());
        Self { values }
    }

    /// Returns a new snapshot with the field named `name` replaced.
    ///
    /// # Errors
    /// Returns error if no field has that wire name.
    pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        let field = F::from_key(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        Ok(self.set_field(field, value))
    }

    /// Returns the value of a field, empty when never set.
    #[must_use]
    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Returns whether the field has been set.
    #[must_use]
    pub fn is_set(&self, field: F) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterates the fields that have been set.
    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Returns the number of fields set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no field has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<F: FormField> Default for FormSnapshot<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered, growable list of phone numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneList {
    slots: Arc<Vec<String>>,
}

impl PhoneList {
    /// Creates a list with one empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(vec![String::new()]),
        }
    }

    /// Returns a new list with one empty slot appended.
    #[must_use]
    pub fn append_field(&self) -> Self {
        let mut slots = Arc::clone(&self.slots);
        Arc::make_mut(&mut slots).push(String::new());
        Self { slots }
    }

    /// Returns a new list with one slot replaced.
    ///
    /// # Errors
    /// Returns error if `index` is past the end.
    pub fn set(&self, index: usize, value: impl Into<String>) -> Result<Self, FormError> {
        if index >= self.slots.len() {
            return Err(FormError::PhoneSlotOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        let mut slots = Arc::clone(&self.slots);
        Arc::make_mut(&mut slots)[index] = value.into();
        Ok(Self { slots })
    }

    /// Returns the slots.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the list has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for PhoneList {
    fn default() -> Self {
        Self::new()
    }
}

/// Client registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientForm {
    fields: FormSnapshot<ClientField>,
    key: SubmissionKey,
}

impl ClientForm {
    /// Creates an empty form with a fresh submission key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FormSnapshot::new(),
            key: SubmissionKey::generate(),
        }
    }

    /// Returns a new form with one field replaced.
    #[must_use]
    pub fn set_field(&self, field: ClientField, value: impl Into<String>) -> Self {
        Self {
            fields: self.fields.set_field(field, value),
            key: self.key.clone(),
        }
    }

    /// Returns the field values.
    #[must_use]
    pub const fn fields(&self) -> &FormSnapshot<ClientField> {
        &self.fields
    }

    /// Builds the record; unset fields are persisted as empty strings.
    #[must_use]
    pub fn to_record(&self) -> ClientRecord {
        ClientRecord::new(
            self.fields.get(ClientField::Name),
            self.fields.get(ClientField::Email),
            self.fields.get(ClientField::Phone),
        )
    }
}

impl Default for ClientForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Company registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyForm {
    fields: FormSnapshot<CompanyField>,
    phones: PhoneList,
    key: SubmissionKey,
}

impl CompanyForm {
    /// Creates an empty form with a fresh submission key.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FormSnapshot::new(),
            phones: PhoneList::new(),
            key: SubmissionKey::generate(),
        }
    }

    /// Returns a new form with one field replaced.
    #[must_use]
    pub fn set_field(&self, field: CompanyField, value: impl Into<String>) -> Self {
        Self {
            fields: self.fields.set_field(field, value),
            phones: self.phones.clone(),
            key: self.key.clone(),
        }
    }

    /// Returns a new form with an empty phone slot appended.
    #[must_use]
    pub fn append_phone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            phones: self.phones.append_field(),
            key: self.key.clone(),
        }
    }

    /// Returns a new form with one phone slot replaced.
    ///
    /// # Errors
    /// Returns error if `index` is past the end.
    pub fn set_phone(&self, index: usize, value: impl Into<String>) -> Result<Self, FormError> {
        Ok(Self {
            fields: self.fields.clone(),
            phones: self.phones.set(index, value)?,
            key: self.key.clone(),
        })
    }

    /// Returns the field values.
    #[must_use]
    pub const fn fields(&self) -> &FormSnapshot<CompanyField> {
        &self.fields
    }

    /// Returns the phone list.
    #[must_use]
    pub const fn phones(&self) -> &PhoneList {
        &self.phones
    }

    /// Builds the record. An empty address becomes `None`; everything else is
    /// persisted as entered.
    #[must_use]
    pub fn to_record(&self) -> CompanyRecord {
        let address = self.fields.get(CompanyField::Address);
        CompanyRecord {
            name: self.fields.get(CompanyField::Name).to_string(),
            nit: self.fields.get(CompanyField::Nit).to_string(),
            email: self.fields.get(CompanyField::Email).to_string(),
            phone_fixed: self.fields.get(CompanyField::PhoneFixed).to_string(),
            phone_cell: self.fields.get(CompanyField::PhoneCell).to_string(),
            address: (!address.is_empty()).then(|| address.to_string()),
            kind: self.fields.get(CompanyField::Type).to_string(),
            subtype: self.fields.get(CompanyField::Subtype).to_string(),
            description: self.fields.get(CompanyField::Description).to_string(),
            telefonos: self.phones.as_slice().to_vec(),
        }
    }
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The form of the user type chosen at the start of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationForm {
    /// Client form.
    Client(ClientForm),
    /// Company form.
    Company(CompanyForm),
}

impl RegistrationForm {
    /// Creates an empty form for the user type.
    #[must_use]
    pub fn new(user_type: UserType) -> Self {
        match user_type {
            UserType::Cliente => Self::Client(ClientForm::new()),
            UserType::Empresa => Self::Company(CompanyForm::new()),
        }
    }

    /// Returns the discriminant.
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        match self {
            Self::Client(_) => UserType::Cliente,
            Self::Company(_) => UserType::Empresa,
        }
    }

    /// Returns the idempotency key shared by every submission of this form.
    #[must_use]
    pub const fn submission_key(&self) -> &SubmissionKey {
        match self {
            Self::Client(form) => &form.key,
            Self::Company(form) => &form.key,
        }
    }

    /// Returns a new form with the field named `name` replaced.
    ///
    /// # Errors
    /// Returns error if the form has no field with that name.
    pub fn set_field_by_name(&self, name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        Ok(match self {
            Self::Client(form) => Self::Client(ClientForm {
                fields: form.fields.set_field_by_name(name, value)?,
                key: form.key.clone(),
            }),
            Self::Company(form) => Self::Company(CompanyForm {
                fields: form.fields.set_field_by_name(name, value)?,
                phones: form.phones.clone(),
                key: form.key.clone(),
            }),
        })
    }

    /// Builds the record to submit.
    #[must_use]
    pub fn to_record(&self) -> RegistrationRecord {
        match self {
            Self::Client(form) => RegistrationRecord::Client(form.to_record()),
            Self::Company(form) => RegistrationRecord::Company(form.to_record()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_keeps_last_value_only() {
        let snapshot = FormSnapshot::<ClientField>::new()
            .set_field(ClientField::Name, "A")
            .set_field(ClientField::Email, "a@x.com")
            .set_field(ClientField::Name, "Ana")
            .set_field(ClientField::Email, "ana@x.com");

        let fields: Vec<_> = snapshot.iter().collect();
        assert_eq!(
            fields,
            [(ClientField::Name, "Ana"), (ClientField::Email, "ana@x.com")]
        );
        assert!(!snapshot.is_set(ClientField::Phone));
    }

    #[test]
    fn test_set_field_does_not_touch_previous_snapshot() {
        let before = FormSnapshot::<ClientField>::new().set_field(ClientField::Name, "Ana");
        let after = before.set_field(ClientField::Name, "Beatriz");

        assert_eq!(before.get(ClientField::Name), "Ana");
        assert_eq!(after.get(ClientField::Name), "Beatriz");
        assert_eq!(before.len(), 1);
    }

    #[test]
    fn test_set_field_by_name() {
        let snapshot = FormSnapshot::<CompanyField>::new()
            .set_field_by_name("phoneCell", "3001234567")
            .unwrap();
        assert_eq!(snapshot.get(CompanyField::PhoneCell), "3001234567");

        let err = snapshot.set_field_by_name("telefono", "1").unwrap_err();
        assert_eq!(err, FormError::UnknownField("telefono".into()));
    }

    #[test]
    fn test_append_phone_preserves_entries() {
        let phones = PhoneList::new()
            .set(0, "6011111")
            .unwrap()
            .append_field()
            .set(1, "6012222")
            .unwrap();
        let grown = phones.append_field();

        assert_eq!(phones.len(), 2);
        assert_eq!(grown.len(), phones.len() + 1);
        assert_eq!(&grown.as_slice()[..2], phones.as_slice());
        assert_eq!(grown.as_slice()[2], "");
    }

    #[test]
    fn test_set_phone_out_of_range() {
        let err = PhoneList::new().set(3, "1").unwrap_err();
        assert_eq!(err, FormError::PhoneSlotOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn test_client_record_accepts_empty_fields() {
        let form = ClientForm::new().set_field(ClientField::Name, "Ana");
        let record = form.to_record();

        assert_eq!(record, ClientRecord::new("Ana", "", ""));
    }

    #[test]
    fn test_company_record() {
        let form = CompanyForm::new()
            .set_field(CompanyField::Name, "Cerrajería Segura")
            .set_field(CompanyField::Nit, "900123")
            .set_field(CompanyField::Type, "Servicios")
            .append_phone()
            .set_phone(1, "6013333")
            .unwrap();
        let record = form.to_record();

        assert_eq!(record.name, "Cerrajería Segura");
        assert_eq!(record.kind, "Servicios");
        assert_eq!(record.address, None);
        assert_eq!(record.telefonos, ["", "6013333"]);
    }

    #[test]
    fn test_submission_key_survives_edits() {
        let form = RegistrationForm::new(UserType::Cliente);
        let edited = form.set_field_by_name("email", "a@x.com").unwrap();

        assert_eq!(form.submission_key(), edited.submission_key());
        assert_ne!(
            form.submission_key(),
            RegistrationForm::new(UserType::Cliente).submission_key()
        );
    }

    #[test]
    fn test_company_field_rejected_on_client_form() {
        let form = RegistrationForm::new(UserType::Cliente);
        assert!(form.set_field_by_name("nit", "1").is_err());
        assert_eq!(form.to_record().user_type(), UserType::Cliente);
    }
}
