//! Contact actions handed to the system URI handler.

use std::fmt;

/// A contact URI for calling or messaging a business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactUri {
    /// Phone call, `tel:` scheme.
    Call(String),
    /// WhatsApp chat, `whatsapp://send` scheme.
    WhatsApp(String),
}

impl ContactUri {
    /// Returns the URI string.
    #[must_use]
    pub fn to_uri(&self) -> String {
        match self {
            Self::Call(phone) => format!("tel:{}", compact(phone)),
            Self::WhatsApp(phone) => format!("whatsapp://send?phone={}", compact(phone)),
        }
    }
}

impl fmt::Display for ContactUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

fn compact(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Public page of a business, used when sharing.
#[must_use]
pub fn share_url(company_id: &str) -> String {
    format!("https://findercol.app/empresa/{company_id}")
}

/// Text copied when sharing a business.
#[must_use]
pub fn share_message(company_name: &str, company_id: &str) -> String {
    format!("¡Mira esta empresa! {company_name} {}", share_url(company_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uris() {
        assert_eq!(
            ContactUri::Call("+57 300 123 4567".into()).to_uri(),
            "tel:+573001234567"
        );
        assert_eq!(
            ContactUri::WhatsApp("+573001234567".into()).to_uri(),
            "whatsapp://send?phone=+573001234567"
        );
    }

    #[test]
    fn test_share_message() {
        assert_eq!(
            share_message("Cerrajería 24/7", "1"),
            "¡Mira esta empresa! Cerrajería 24/7 https://findercol.app/empresa/1"
        );
    }
}
