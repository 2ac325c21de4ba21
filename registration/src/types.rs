//! Core types for the registration form.

use serde::{Deserialize, Serialize};

/// Maximum accepted attachment size (5 MiB)
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// Text fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Last name ("Nom")
    LastName,
    /// First name ("Prénom")
    FirstName,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Optional free-text message
    Message,
}

/// Accepted attachment formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentMime {
    /// `application/pdf`
    Pdf,
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
}

impl AttachmentMime {
    /// Parse a MIME type string, rejecting unsupported formats
    #[must_use]
    pub fn parse(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            _ => None,
        }
    }
}

/// A document attached to the registration (identity card, medical
/// certificate, ...)
///
/// Only metadata is held; the bytes stay with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name
    pub name: String,
    /// Validated format
    pub mime: AttachmentMime,
    /// File size in bytes
    pub size_bytes: u64,
}

/// License selection accompanying a registration
///
/// The CSA license is per person and covers all sections. A registration
/// can mix new licenses and renewals; unchecking `included` zeroes the
/// license fees without losing the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseConfig {
    /// Whether license fees are included in the total
    pub included: bool,
    /// Number of new licenses
    pub new_count: u32,
    /// Number of license renewals
    pub renewal_count: u32,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            included: true,
            new_count: 1,
            renewal_count: 0,
        }
    }
}

/// Per-field validation errors, displayed next to each input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    /// Error on the last name field
    pub last_name: Option<String>,
    /// Error on the first name field
    pub first_name: Option<String>,
    /// Error on the email field
    pub email: Option<String>,
    /// Error on the phone field
    pub phone: Option<String>,
    /// Error on the section selection
    pub sections: Option<String>,
    /// Error on the attachment
    pub attachment: Option<String>,
}

impl FieldErrors {
    /// Whether no field is in error
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last_name.is_none()
            && self.first_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.sections.is_none()
            && self.attachment.is_none()
    }

    /// Clear the error attached to a text field
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::LastName => self.last_name = None,
            Field::FirstName => self.first_name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
            // The message is optional and never in error
            Field::Message => {},
        }
    }
}

/// Lifecycle of a submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Form is being filled in
    #[default]
    Idle,
    /// Notification delivery in flight; further submits are ignored
    Submitting,
    /// Delivery confirmed; the form auto-closes shortly after
    Success,
    /// Delivery failed; the form stays populated for a retry
    Failure,
}
