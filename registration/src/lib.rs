//! # CSA Registration
//!
//! Multi-section registration engine for the CSA club.
//!
//! The engine is a pure reducer driving the registration form: section
//! selection with per-section headcounts, license fees, synchronous
//! validation with French error messages, and a submission state machine
//! that delivers the summary through an injected notifier.
//!
//! ## Example
//!
//! ```ignore
//! use csa_registration::{
//!     RegistrationAction, RegistrationEnvironment, RegistrationReducer, RegistrationState,
//! };
//! use csa_runtime::Store;
//!
//! let store = Store::new(
//!     RegistrationState::default(),
//!     RegistrationReducer::new(),
//!     RegistrationEnvironment::new(clock, notifier),
//! );
//!
//! store.send(RegistrationAction::Submit).await?;
//! ```

pub mod ledger;
pub mod pricing;
pub mod reducer;
pub mod summary;
pub mod types;
pub mod validation;

pub use ledger::{LineItem, SelectionLedger};
pub use pricing::{NEW_LICENSE_FEE, RENEWAL_LICENSE_FEE, Totals, format_eur};
pub use reducer::{
    HIGHLIGHT_DURATION, RegistrationAction, RegistrationEnvironment, RegistrationReducer,
    RegistrationState, SUCCESS_CLOSE_DELAY,
};
pub use types::{
    Attachment, AttachmentMime, Field, FieldErrors, LicenseConfig, MAX_ATTACHMENT_BYTES,
    SubmissionStatus,
};
