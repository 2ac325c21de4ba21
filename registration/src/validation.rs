//! Form validation.
//!
//! Validation runs synchronously when the member submits. Error messages
//! are the French copy displayed next to each field. Attachment format and
//! size are additionally checked eagerly, at selection time.

use crate::ledger::SelectionLedger;
use crate::types::{Attachment, AttachmentMime, FieldErrors, MAX_ATTACHMENT_BYTES};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // Pattern is a literal, cannot fail at runtime
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

// Applied after stripping whitespace: optional country code, then 9-10 digits
#[allow(clippy::expect_used)] // Pattern is a literal, cannot fail at runtime
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+\d{1,3})?\d{9,10}$").expect("valid phone pattern"));

/// Validate the whole form, returning every error at once
#[must_use]
pub fn validate_form(
    last_name: &str,
    first_name: &str,
    email: &str,
    phone: &str,
    ledger: &SelectionLedger,
    attachment: Option<&Attachment>,
) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if last_name.trim().is_empty() {
        errors.last_name = Some("Le nom est requis".to_string());
    }

    if first_name.trim().is_empty() {
        errors.first_name = Some("Le prénom est requis".to_string());
    }

    if ledger.is_empty() {
        errors.sections = Some("Veuillez sélectionner au moins une section".to_string());
    }

    if email.trim().is_empty() {
        errors.email = Some("L'email est requis".to_string());
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some("Adresse email invalide".to_string());
    }

    if phone.trim().is_empty() {
        errors.phone = Some("Le numéro de téléphone est requis".to_string());
    } else {
        let stripped: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !PHONE_RE.is_match(&stripped) {
            errors.phone = Some("Numéro de téléphone invalide".to_string());
        }
    }

    if attachment.is_none() {
        errors.attachment = Some(
            "Veuillez joindre un document requis (carte d'identité, certificat médical, etc.)"
                .to_string(),
        );
    }

    errors
}

/// Check a file selected as attachment, format first then size
///
/// # Errors
///
/// Returns the French error message to display when the format is not
/// PDF/JPEG/PNG or the file exceeds [`MAX_ATTACHMENT_BYTES`].
pub fn check_attachment(name: &str, mime: &str, size_bytes: u64) -> Result<Attachment, String> {
    let Some(mime) = AttachmentMime::parse(mime) else {
        return Err(
            "Format de fichier non valide. Veuillez télécharger un PDF ou une image (JPEG, PNG)."
                .to_string(),
        );
    };

    if size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(
            "Le fichier est trop volumineux. La taille maximale est de 5MB.".to_string(),
        );
    }

    Ok(Attachment {
        name: name.to_string(),
        mime,
        size_bytes,
    })
}
