//! # Contact Form
//!
//! The message a visitor sends from the contact page. There is no mail
//! delivery; the storefront validates, logs and acknowledges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{
    validate_email, validate_required, ValidationResult, MAX_FIELD_LEN, MAX_MESSAGE_LEN,
};

/// The contact form's subject drop-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    General,
    Artwork,
    Artist,
    Exhibition,
    Press,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 6] = [
        ContactSubject::General,
        ContactSubject::Artwork,
        ContactSubject::Artist,
        ContactSubject::Exhibition,
        ContactSubject::Press,
        ContactSubject::Other,
    ];

    /// Form value.
    pub const fn value(&self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Artwork => "artwork",
            ContactSubject::Artist => "artist",
            ContactSubject::Exhibition => "exhibition",
            ContactSubject::Press => "press",
            ContactSubject::Other => "other",
        }
    }

    /// Option label.
    pub const fn label(&self) -> &'static str {
        match self {
            ContactSubject::General => "General Inquiry",
            ContactSubject::Artwork => "Artwork Purchase",
            ContactSubject::Artist => "Artist Collaboration",
            ContactSubject::Exhibition => "Exhibition Proposal",
            ContactSubject::Press => "Press & Media",
            ContactSubject::Other => "Other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactSubject {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "subject".to_string(),
            });
        }
        ContactSubject::ALL
            .into_iter()
            .find(|subject| subject.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "subject".to_string(),
                allowed: ContactSubject::ALL
                    .iter()
                    .map(|subject| subject.value().to_string())
                    .collect(),
            })
    }
}

/// A filled-in contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactMessage {
    /// Checks every field; the first failure wins.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name, MAX_FIELD_LEN)?;
        validate_email(&self.email)?;
        validate_required("message", &self.message, MAX_MESSAGE_LEN)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: ContactSubject::Exhibition,
            message: "We would love to host a show.".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert!(message().validate().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let mut msg = message();
        msg.name = " ".to_string();
        assert_eq!(
            msg.validate(),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );

        let mut msg = message();
        msg.message.clear();
        assert!(matches!(msg.validate(), Err(ValidationError::Required { .. })));

        let mut msg = message();
        msg.email = "jane".to_string();
        assert!(matches!(
            msg.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_subject_parsing() {
        assert_eq!("press".parse::<ContactSubject>().unwrap(), ContactSubject::Press);
        assert!(matches!(
            "".parse::<ContactSubject>(),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            "spam".parse::<ContactSubject>(),
            Err(ValidationError::NotAllowed { .. })
        ));
        assert_eq!(ContactSubject::Press.to_string(), "Press & Media");
    }
}
