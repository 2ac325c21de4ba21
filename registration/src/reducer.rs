//! Registration form reducer.
//!
//! Drives the multi-section registration form: field edits, section
//! selection, license configuration, and the submission state machine.
//! Validation is synchronous inside the `Submit` command; delivery runs as
//! a `Future` effect against the injected notifier.

use crate::ledger::SelectionLedger;
use crate::pricing::Totals;
use crate::summary;
use crate::types::{Attachment, Field, FieldErrors, LicenseConfig, SubmissionStatus};
use crate::validation;
use csa_catalog::{CatalogSection, SectionId};
use csa_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use csa_macros::Action;
use csa_notify::Notifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// How long a just-added section stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(1500);

/// How long the success banner shows before the form auto-closes
pub const SUCCESS_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Actions of the registration form
///
/// Commands are member intents; events record what the submission pipeline
/// reported back.
#[derive(Action, Clone, Debug, PartialEq)]
pub enum RegistrationAction {
    /// A text field changed
    #[command]
    FieldChanged {
        /// The edited field
        field: Field,
        /// The new value
        value: String,
    },

    /// The member picked a file to attach
    #[command]
    AttachmentSelected {
        /// Original file name
        name: String,
        /// Reported MIME type
        mime: String,
        /// File size in bytes
        size_bytes: u64,
    },

    /// The member removed the attached file
    #[command]
    AttachmentRemoved,

    /// A section was added to the selection
    #[command]
    AddSection {
        /// Section identifier
        id: SectionId,
        /// Section name
        name: String,
        /// Annual price per person
        unit_price: f64,
    },

    /// A section was removed from the selection
    #[command]
    RemoveSection {
        /// Section identifier
        id: SectionId,
    },

    /// The headcount for a section changed
    #[command]
    SetQuantity {
        /// Section identifier
        id: SectionId,
        /// New headcount, at least 1
        quantity: u32,
    },

    /// The license checkbox was toggled
    #[command]
    SetLicenseIncluded {
        /// Whether license fees are included
        included: bool,
    },

    /// The new-license counter changed
    #[command]
    SetNewLicenseCount {
        /// Number of new licenses
        count: u32,
    },

    /// The renewal counter changed
    #[command]
    SetRenewalLicenseCount {
        /// Number of renewals
        count: u32,
    },

    /// The member submitted the form
    #[command]
    Submit,

    /// The form was closed (also fired automatically after success)
    #[command]
    Close,

    /// The notifier confirmed delivery
    #[event]
    SubmissionAccepted,

    /// The notifier failed to deliver
    #[event]
    SubmissionRejected {
        /// Delivery failure description
        reason: String,
    },

    /// A section highlight timed out
    #[event]
    HighlightExpired {
        /// The section whose highlight expires
        id: SectionId,
    },
}

/// State of the registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationState {
    /// Last name ("Nom")
    pub last_name: String,
    /// First name ("Prénom")
    pub first_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Optional free-text message
    pub message: String,
    /// Attached document, once a valid file is selected
    pub attachment: Option<Attachment>,
    /// Selected sections
    pub ledger: SelectionLedger,
    /// License selection
    pub license: LicenseConfig,
    /// Current validation errors
    pub errors: FieldErrors,
    /// Submission lifecycle
    pub status: SubmissionStatus,
    /// Section to highlight as just added, if any
    pub recently_added: Option<SectionId>,
}

impl RegistrationState {
    /// Form pre-seeded for a single section (the section-card entry point)
    #[must_use]
    pub fn for_section(section: &CatalogSection) -> Self {
        let mut state = Self::default();
        state
            .ledger
            .add(section.id, &section.name, section.unit_price);
        state
    }

    /// Current totals, recomputed from the selection
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.ledger, &self.license)
    }

    /// Whether a submission is in flight
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}

/// Environment dependencies for the registration reducer
#[derive(Clone)]
pub struct RegistrationEnvironment {
    /// Clock for timestamping submissions
    pub clock: Arc<dyn Clock>,
    /// Delivery service for the registration notification
    pub notifier: Arc<dyn Notifier>,
}

impl RegistrationEnvironment {
    /// Creates a new `RegistrationEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>) -> Self {
        Self { clock, notifier }
    }
}

/// Reducer for the registration form
#[derive(Clone, Debug, Default)]
pub struct RegistrationReducer;

impl RegistrationReducer {
    /// Creates a new `RegistrationReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn validate(state: &RegistrationState) -> FieldErrors {
        validation::validate_form(
            &state.last_name,
            &state.first_name,
            &state.email,
            &state.phone,
            &state.ledger,
            state.attachment.as_ref(),
        )
    }
}

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            RegistrationAction::FieldChanged { field, value } => {
                match field {
                    Field::LastName => state.last_name = value,
                    Field::FirstName => state.first_name = value,
                    Field::Email => state.email = value,
                    Field::Phone => state.phone = value,
                    Field::Message => state.message = value,
                }
                // Editing a field clears only that field's error
                state.errors.clear(field);
                SmallVec::new()
            },

            RegistrationAction::AttachmentSelected {
                name,
                mime,
                size_bytes,
            } => {
                match validation::check_attachment(&name, &mime, size_bytes) {
                    Ok(attachment) => {
                        state.attachment = Some(attachment);
                        state.errors.attachment = None;
                    },
                    // Invalid selection: previous attachment stays in place
                    Err(message) => {
                        state.errors.attachment = Some(message);
                    },
                }
                SmallVec::new()
            },

            RegistrationAction::AttachmentRemoved => {
                state.attachment = None;
                SmallVec::new()
            },

            RegistrationAction::AddSection {
                id,
                name,
                unit_price,
            } => {
                let added = state.ledger.add(id, &name, unit_price);
                state.recently_added = Some(added);
                state.errors.sections = None;

                smallvec![Effect::Delay {
                    duration: HIGHLIGHT_DURATION,
                    action: Box::new(RegistrationAction::HighlightExpired { id: added }),
                }]
            },

            RegistrationAction::RemoveSection { id } => {
                state.ledger.remove(id);
                SmallVec::new()
            },

            RegistrationAction::SetQuantity { id, quantity } => {
                state.ledger.set_quantity(id, quantity);
                SmallVec::new()
            },

            RegistrationAction::SetLicenseIncluded { included } => {
                state.license.included = included;
                SmallVec::new()
            },

            RegistrationAction::SetNewLicenseCount { count } => {
                state.license.new_count = count;
                SmallVec::new()
            },

            RegistrationAction::SetRenewalLicenseCount { count } => {
                state.license.renewal_count = count;
                SmallVec::new()
            },

            RegistrationAction::Submit => {
                // One submission at a time
                if state.is_submitting() {
                    tracing::debug!("Submission already in flight, ignoring");
                    return SmallVec::new();
                }

                let errors = Self::validate(state);
                if !errors.is_empty() {
                    state.errors = errors;
                    return SmallVec::new();
                }

                state.errors = FieldErrors::default();
                state.status = SubmissionStatus::Submitting;

                let notification = summary::build_notification(state);
                tracing::info!(
                    email = %state.email,
                    sections = state.ledger.len(),
                    grand_total = state.totals().grand_total,
                    submitted_at = %env.clock.now(),
                    "Submitting registration"
                );

                let notifier = Arc::clone(&env.notifier);
                smallvec![Effect::Future(Box::pin(async move {
                    match notifier.send_registration(notification).await {
                        Ok(()) => Some(RegistrationAction::SubmissionAccepted),
                        Err(error) => Some(RegistrationAction::SubmissionRejected {
                            reason: error.to_string(),
                        }),
                    }
                }))]
            },

            RegistrationAction::Close => {
                *state = RegistrationState::default();
                SmallVec::new()
            },

            // ========== Events ==========
            RegistrationAction::SubmissionAccepted => {
                state.status = SubmissionStatus::Success;

                // Leave the success banner up briefly, then reset
                smallvec![Effect::Delay {
                    duration: SUCCESS_CLOSE_DELAY,
                    action: Box::new(RegistrationAction::Close),
                }]
            },

            RegistrationAction::SubmissionRejected { reason } => {
                tracing::warn!(%reason, "Registration notification failed");
                state.status = SubmissionStatus::Failure;
                SmallVec::new()
            },

            RegistrationAction::HighlightExpired { id } => {
                // A later add may have retargeted the highlight
                if state.recently_added == Some(id) {
                    state.recently_added = None;
                }
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttachmentMime;
    use csa_notify::mocks::MockNotifier;
    use csa_testing::{ReducerTest, assertions, test_clock};

    fn test_env() -> RegistrationEnvironment {
        RegistrationEnvironment::new(Arc::new(test_clock()), Arc::new(MockNotifier::new()))
    }

    fn valid_state() -> RegistrationState {
        let mut state = RegistrationState {
            last_name: "Dupont".to_string(),
            first_name: "Michel".to_string(),
            email: "michel@example.fr".to_string(),
            phone: "0612345678".to_string(),
            attachment: Some(Attachment {
                name: "certificat.pdf".to_string(),
                mime: AttachmentMime::Pdf,
                size_bytes: 42_000,
            }),
            ..RegistrationState::default()
        };
        state.ledger.add(SectionId(1), "Tir à l'Arc", 180.0);
        state
    }

    #[test]
    fn field_edit_stores_value_and_clears_its_error() {
        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(RegistrationState {
                errors: FieldErrors {
                    email: Some("L'email est requis".to_string()),
                    phone: Some("Le numéro de téléphone est requis".to_string()),
                    ..FieldErrors::default()
                },
                ..RegistrationState::default()
            })
            .when_action(RegistrationAction::FieldChanged {
                field: Field::Email,
                value: "michel@example.fr".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.email, "michel@example.fr");
                assert!(state.errors.email.is_none());
                // Other errors untouched
                assert!(state.errors.phone.is_some());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn add_section_highlights_and_schedules_expiry() {
        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(RegistrationState {
                errors: FieldErrors {
                    sections: Some("Veuillez sélectionner au moins une section".to_string()),
                    ..FieldErrors::default()
                },
                ..RegistrationState::default()
            })
            .when_action(RegistrationAction::AddSection {
                id: SectionId(9),
                name: "Yoga".to_string(),
                unit_price: 210.0,
            })
            .then_state(|state| {
                assert_eq!(state.ledger.len(), 1);
                assert_eq!(state.recently_added, Some(SectionId(9)));
                assert!(state.errors.sections.is_none());
            })
            .then_effects(assertions::assert_has_delay_effect)
            .run();
    }

    #[test]
    fn highlight_expiry_ignores_stale_section() {
        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(RegistrationState {
                recently_added: Some(SectionId(2)),
                ..RegistrationState::default()
            })
            .when_action(RegistrationAction::HighlightExpired { id: SectionId(9) })
            .then_state(|state| {
                // A later add retargeted the highlight; keep it
                assert_eq!(state.recently_added, Some(SectionId(2)));
            })
            .run();
    }

    #[test]
    fn invalid_attachment_keeps_previous_file() {
        let mut state = valid_state();
        state.attachment = Some(Attachment {
            name: "ancien.pdf".to_string(),
            mime: AttachmentMime::Pdf,
            size_bytes: 1_000,
        });

        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(RegistrationAction::AttachmentSelected {
                name: "photo.gif".to_string(),
                mime: "image/gif".to_string(),
                size_bytes: 1_000,
            })
            .then_state(|state| {
                assert!(state.errors.attachment.is_some());
                assert_eq!(
                    state.attachment.as_ref().map(|a| a.name.as_str()),
                    Some("ancien.pdf")
                );
            })
            .run();
    }

    #[test]
    fn valid_attachment_replaces_and_clears_error() {
        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(RegistrationState {
                errors: FieldErrors {
                    attachment: Some("Format de fichier non valide.".to_string()),
                    ..FieldErrors::default()
                },
                ..RegistrationState::default()
            })
            .when_action(RegistrationAction::AttachmentSelected {
                name: "certificat.pdf".to_string(),
                mime: "application/pdf".to_string(),
                size_bytes: 42_000,
            })
            .then_state(|state| {
                assert!(state.errors.attachment.is_none());
                assert!(state.attachment.is_some());
            })
            .run();
    }

    #[test]
    fn submit_with_invalid_form_sets_errors_and_stays_put() {
        let mut state = valid_state();
        state.email = String::new();

        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(RegistrationAction::Submit)
            .then_state(|state| {
                assert_eq!(state.errors.email.as_deref(), Some("L'email est requis"));
                assert_ne!(state.status, SubmissionStatus::Submitting);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn submit_with_valid_form_starts_delivery() {
        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(valid_state())
            .when_action(RegistrationAction::Submit)
            .then_state(|state| {
                assert!(state.is_submitting());
                assert!(state.errors.is_empty());
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut state = valid_state();
        state.status = SubmissionStatus::Submitting;

        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(RegistrationAction::Submit)
            .then_state(|state| {
                assert!(state.is_submitting());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn acceptance_schedules_the_auto_close() {
        let mut state = valid_state();
        state.status = SubmissionStatus::Submitting;

        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(RegistrationAction::SubmissionAccepted)
            .then_state(|state| {
                assert_eq!(state.status, SubmissionStatus::Success);
            })
            .then_effects(assertions::assert_has_delay_effect)
            .run();
    }

    #[test]
    fn rejection_keeps_the_form_populated() {
        let mut state = valid_state();
        state.status = SubmissionStatus::Submitting;

        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(RegistrationAction::SubmissionRejected {
                reason: "simulated delivery failure".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.status, SubmissionStatus::Failure);
                assert_eq!(state.last_name, "Dupont");
                assert_eq!(state.ledger.len(), 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn close_resets_to_defaults() {
        let mut state = valid_state();
        state.status = SubmissionStatus::Success;

        ReducerTest::new(RegistrationReducer::new())
            .with_env(test_env())
            .given_state(state)
            .when_action(RegistrationAction::Close)
            .then_state(|state| {
                assert_eq!(*state, RegistrationState::default());
                assert!(state.ledger.is_empty());
                assert_eq!(state.license, LicenseConfig::default());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn for_section_preseeds_the_ledger() {
        let section = CatalogSection {
            id: SectionId(9),
            name: "Yoga".to_string(),
            unit_price: 210.0,
            category: csa_catalog::Category::Wellness,
            schedule: "Lundi et Jeudi 12h-13h".to_string(),
            location: None,
            description: String::new(),
        };

        let state = RegistrationState::for_section(&section);

        assert_eq!(state.ledger.len(), 1);
        assert_eq!(state.ledger.items()[0].quantity, 1);
        assert_eq!(state.ledger.items()[0].unit_price, 210.0);
    }
}
