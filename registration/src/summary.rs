//! Summary serialization: the text the secretariat receives.
//!
//! The wording, pluralization, and number formatting follow the club's
//! established email template; changing them breaks the secretariat's
//! mail filters.

use crate::ledger::SelectionLedger;
use crate::pricing::{NEW_LICENSE_FEE, RENEWAL_LICENSE_FEE, Totals, format_eur};
use crate::reducer::RegistrationState;
use crate::types::LicenseConfig;
use csa_notify::RegistrationNotification;

/// Itemized section lines, one per selected section
///
/// Format: `"{name} ({q} personne(s) x {price}€ = {subtotal}€)"`, subtotal
/// rounded to two decimals, unit price printed as advertised.
#[must_use]
pub fn sections_text(ledger: &SelectionLedger) -> String {
    ledger
        .items()
        .iter()
        .map(|item| {
            let plural = if item.quantity > 1 { "s" } else { "" };
            format!(
                "{} ({} personne{} x {}€ = {:.2}€)",
                item.name,
                item.quantity,
                plural,
                item.unit_price,
                item.subtotal()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// License summary block
///
/// `"Pas de licence"` when licenses are excluded, an itemized
/// `Licences CSA:` block otherwise.
#[must_use]
pub fn license_text(license: &LicenseConfig) -> String {
    if !license.included {
        return "Pas de licence".to_string();
    }

    let mut details = Vec::new();

    if license.new_count > 0 {
        let plural = if license.new_count > 1 { "s" } else { "" };
        details.push(format!(
            "{} Nouvelle{plural} licence{plural} x {NEW_LICENSE_FEE}€ = {:.2}€",
            license.new_count,
            NEW_LICENSE_FEE * f64::from(license.new_count)
        ));
    }

    if license.renewal_count > 0 {
        let plural = if license.renewal_count > 1 { "s" } else { "" };
        details.push(format!(
            "{} Renouvellement{plural} x {RENEWAL_LICENSE_FEE}€ = {:.2}€",
            license.renewal_count,
            RENEWAL_LICENSE_FEE * f64::from(license.renewal_count)
        ));
    }

    if details.is_empty() {
        return "Licences CSA: 0€".to_string();
    }

    let total =
        NEW_LICENSE_FEE * f64::from(license.new_count) + RENEWAL_LICENSE_FEE * f64::from(license.renewal_count);

    format!(
        "Licences CSA:\n{}\nTotal licences: {total:.2}€",
        details.join("\n")
    )
}

/// Subject line: single-section registrations name the section
#[must_use]
pub fn subject(ledger: &SelectionLedger) -> String {
    if ledger.len() > 1 {
        "Nouvelle inscription à plusieurs sections".to_string()
    } else {
        let name = ledger.items().first().map_or("", |item| item.name.as_str());
        format!("Nouvelle inscription à la section: {name}")
    }
}

/// Build the notification payload for a validated form
#[must_use]
pub fn build_notification(state: &RegistrationState) -> RegistrationNotification {
    let totals = Totals::compute(&state.ledger, &state.license);

    let message = if state.message.trim().is_empty() {
        "Aucun message complémentaire".to_string()
    } else {
        state.message.clone()
    };

    // Zero license fee is written "0€", not "0.00€", in the template
    let license_subtotal = if totals.license_subtotal > 0.0 {
        format_eur(totals.license_subtotal)
    } else {
        "0€".to_string()
    };

    RegistrationNotification {
        subject: subject(&state.ledger),
        last_name: state.last_name.clone(),
        first_name: state.first_name.clone(),
        email: state.email.clone(),
        phone: state.phone.clone(),
        message,
        sections_text: sections_text(&state.ledger),
        license_text: license_text(&state.license),
        sections_subtotal: format_eur(totals.sections_subtotal),
        license_subtotal,
        grand_total: format_eur(totals.grand_total),
        attachment_name: state.attachment.as_ref().map(|a| a.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csa_catalog::SectionId;

    #[test]
    fn section_line_singular_and_plural() {
        let mut ledger = SelectionLedger::new();
        ledger.add(SectionId(9), "Yoga", 210.0);
        ledger.add(SectionId(1), "Tir à l'Arc", 180.0);
        ledger.add(SectionId(1), "Tir à l'Arc", 180.0);

        assert_eq!(
            sections_text(&ledger),
            "Yoga (1 personne x 210€ = 210.00€)\nTir à l'Arc (2 personnes x 180€ = 360.00€)"
        );
    }

    #[test]
    fn license_text_excluded() {
        let license = LicenseConfig {
            included: false,
            new_count: 3,
            renewal_count: 2,
        };
        assert_eq!(license_text(&license), "Pas de licence");
    }

    #[test]
    fn license_text_included_with_zero_counts() {
        let license = LicenseConfig {
            included: true,
            new_count: 0,
            renewal_count: 0,
        };
        assert_eq!(license_text(&license), "Licences CSA: 0€");
    }

    #[test]
    fn license_text_itemizes_new_and_renewals() {
        let license = LicenseConfig {
            included: true,
            new_count: 2,
            renewal_count: 1,
        };
        assert_eq!(
            license_text(&license),
            "Licences CSA:\n2 Nouvelles licences x 70€ = 140.00€\n1 Renouvellement x 40€ = 40.00€\nTotal licences: 180.00€"
        );
    }

    #[test]
    fn subject_single_section_names_it() {
        let mut ledger = SelectionLedger::new();
        ledger.add(SectionId(2), "Couture", 160.0);

        assert_eq!(subject(&ledger), "Nouvelle inscription à la section: Couture");
    }

    #[test]
    fn subject_multiple_sections() {
        let mut ledger = SelectionLedger::new();
        ledger.add(SectionId(2), "Couture", 160.0);
        ledger.add(SectionId(9), "Yoga", 210.0);

        assert_eq!(subject(&ledger), "Nouvelle inscription à plusieurs sections");
    }

    #[test]
    fn notification_carries_formatted_totals_and_default_message() {
        let mut state = RegistrationState {
            last_name: "Dupont".to_string(),
            first_name: "Michel".to_string(),
            email: "michel@example.fr".to_string(),
            phone: "0612345678".to_string(),
            ..RegistrationState::default()
        };
        state.ledger.add(SectionId(1), "Tir à l'Arc", 180.0);

        let notification = build_notification(&state);

        assert_eq!(notification.sections_subtotal, "180.00€");
        // Default license: 1 new license at 70€
        assert_eq!(notification.license_subtotal, "70.00€");
        assert_eq!(notification.grand_total, "250.00€");
        assert_eq!(notification.message, "Aucun message complémentaire");
        assert_eq!(notification.attachment_name, None);
    }
}
