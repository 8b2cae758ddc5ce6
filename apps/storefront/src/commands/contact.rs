//! # Contact Commands

use gallery_core::{ContactMessage, CoreError};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;

/// What the contact page shows after sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub message: String,
}

/// Validates and acknowledges a contact form. Nothing is delivered.
pub fn submit_contact(message: ContactMessage) -> Result<ContactReceipt, ApiError> {
    message.validate().map_err(CoreError::from)?;

    info!(subject = message.subject.value(), "Contact message received");
    Ok(ContactReceipt {
        message: "Thank you for your message! We'll get back to you soon.".to_string(),
    })
}
