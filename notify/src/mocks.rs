//! Mock notifier for testing.

use crate::{Notifier, NotifyError, RegistrationNotification};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock notifier.
///
/// Records delivered notifications instead of sending them. Clones share
/// the same recording, so a test can hand one clone to the environment and
/// inspect the other.
#[derive(Debug, Clone)]
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<RegistrationNotification>>>,
    attempts: Arc<AtomicUsize>,
    should_succeed: bool,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotifier {
    /// Create a mock notifier that accepts every notification
    #[must_use]
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(AtomicUsize::new(0)),
            should_succeed: true,
        }
    }

    /// Create a mock notifier that rejects every notification
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(AtomicUsize::new(0)),
            should_succeed: false,
        }
    }

    /// Number of delivery attempts, successful or not
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Acquire)
    }

    /// Notifications recorded so far
    ///
    /// # Panics
    ///
    /// Panics if the recording mutex is poisoned (a test thread panicked
    /// while recording).
    #[must_use]
    #[allow(clippy::expect_used)] // Test helper, poison means a test already failed
    pub fn sent(&self) -> Vec<RegistrationNotification> {
        self.sent.lock().expect("recording mutex poisoned").clone()
    }
}

impl Notifier for MockNotifier {
    fn send_registration(
        &self,
        notification: RegistrationNotification,
    ) -> Pin<Box<dyn Future<Output = Result<(), NotifyError>> + Send + '_>> {
        Box::pin(async move {
            self.attempts.fetch_add(1, Ordering::AcqRel);
            if self.should_succeed {
                if let Ok(mut sent) = self.sent.lock() {
                    sent.push(notification);
                }
                Ok(())
            } else {
                Err(NotifyError::Delivery(
                    "simulated delivery failure".to_string(),
                ))
            }
        })
    }
}
