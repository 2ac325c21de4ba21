//! # CSA Notify
//!
//! Notification delivery for club registrations.
//!
//! When a registration is submitted, the club secretariat receives the form
//! contents as a structured notification. This crate defines the payload,
//! the delivery trait, a console provider for development, and a mock for
//! testing.
//!
//! Delivery is single-attempt: a failed notification surfaces as a failed
//! submission and the member retries from the form.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub mod mocks;

/// Errors that can occur during notification delivery
#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    /// The delivery service rejected or failed to accept the notification
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// A registration notification, ready for delivery
///
/// All monetary fields are pre-formatted strings: rounding to two decimals
/// happens once, when the summary is built, and the payload carries the
/// exact text the secretariat reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationNotification {
    /// Subject line; distinguishes single- and multi-section registrations
    pub subject: String,
    /// Member's last name
    pub last_name: String,
    /// Member's first name
    pub first_name: String,
    /// Member's email address
    pub email: String,
    /// Member's phone number
    pub phone: String,
    /// Free-text message from the member
    pub message: String,
    /// Itemized section lines, one per selected section
    pub sections_text: String,
    /// License summary block
    pub license_text: String,
    /// Formatted sections subtotal
    pub sections_subtotal: String,
    /// Formatted license subtotal
    pub license_subtotal: String,
    /// Formatted grand total
    pub grand_total: String,
    /// Name of the attached document, when one was provided
    pub attachment_name: Option<String>,
}

/// Notification delivery service
///
/// Dyn-compatible so environments can hold an `Arc<dyn Notifier>` and clone
/// it into effect futures.
pub trait Notifier: Send + Sync {
    /// Deliver a registration notification
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Delivery`] when the underlying service fails.
    fn send_registration(
        &self,
        notification: RegistrationNotification,
    ) -> Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send + '_>>;
}

/// Console notifier for development
///
/// Logs the would-be email to the console instead of sending it.
#[derive(Clone, Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a new console notifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn send_registration(
        &self,
        notification: RegistrationNotification,
    ) -> Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send + '_>> {
        Box::pin(async move {
            tracing::info!(
                email = %notification.email,
                subject = %notification.subject,
                grand_total = %notification.grand_total,
                "📧 Registration Notification (Development Mode)"
            );

            println!("\n══════════════════════════════════════════════════════════════");
            println!("  {}", notification.subject);
            println!("══════════════════════════════════════════════════════════════");
            println!("  Nom: {}", notification.last_name);
            println!("  Prénom: {}", notification.first_name);
            println!("  Email: {}", notification.email);
            println!("  Téléphone: {}", notification.phone);
            println!();
            println!("  SECTIONS SÉLECTIONNÉES:");
            for line in notification.sections_text.lines() {
                println!("  {line}");
            }
            println!("  Sous-total sections: {}", notification.sections_subtotal);
            println!();
            for line in notification.license_text.lines() {
                println!("  {line}");
            }
            println!();
            println!("  PRIX TOTAL: {}", notification.grand_total);
            println!();
            println!("  Message: {}", notification.message);
            match &notification.attachment_name {
                Some(name) => println!("  Document joint: {name}"),
                None => println!("  Aucun document joint"),
            }
            println!("══════════════════════════════════════════════════════════════\n");

            Ok(())
        })
    }
}
