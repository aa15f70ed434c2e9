//! Form editing errors.

use thiserror::Error;

/// Form error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Field name does not belong to the form.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// Phone slot index past the end of the list.
    #[error("phone slot {index} out of range (len {len})")]
    PhoneSlotOutOfRange {
        /// Requested slot.
        index: usize,
        /// Current number of slots.
        len: usize,
    },
}
