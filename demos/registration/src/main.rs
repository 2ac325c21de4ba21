//! Registration demo binary
//!
//! Walks a complete member registration against the real club catalog:
//! browse sections and events, fill the form, submit, and watch the
//! success banner auto-close. Delivery goes through the console notifier.

use csa_catalog::{EventFilter, adapt, club_events, club_sections, group_by_month};
use csa_core::environment::SystemClock;
use csa_notify::ConsoleNotifier;
use csa_registration::{
    Field, RegistrationAction, RegistrationEnvironment, RegistrationReducer, RegistrationState,
    format_eur,
};
use csa_runtime::Store;
use csa_session::{MemorySessionStore, Role, SessionStore, User};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registration_demo=debug,csa_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== CSA Club: Multi-Section Registration Demo ===\n");

    // ---- Catalog ----
    let sections: Vec<_> = club_sections().iter().map(adapt).collect();
    println!("Sections proposées ({}):", sections.len());
    for section in &sections {
        println!(
            "  [{}] {} ({:?}) : {}€/an, {}",
            section.id, section.name, section.category, section.unit_price, section.schedule
        );
    }

    // ---- Events calendar ----
    let events = club_events();
    let september = EventFilter::all().month("septembre").apply(&events);
    println!("\nÉvénements en septembre ({}):", september.len());
    for event in &september {
        println!("  {} : {} ({})", event.date, event.title, event.location);
    }

    let tournaments = EventFilter::all().search("tournoi").apply(&events);
    println!("\nRecherche \"tournoi\" par mois:");
    for (month, in_month) in group_by_month(&tournaments) {
        println!("  {month}:");
        for event in in_month {
            println!("    {} : {}", event.date, event.title);
        }
    }

    // ---- Session ----
    let sessions = MemorySessionStore::new();
    sessions.save(&User::new("Michel", "Dupont", "michel.dupont@example.fr", Role::Member));
    if let Some(user) = sessions.load() {
        println!("\nConnecté: {} {} <{}>", user.first_name, user.last_name, user.email);
    }

    // ---- Registration form ----
    let store = Store::new(
        RegistrationState::default(),
        RegistrationReducer::new(),
        RegistrationEnvironment::new(Arc::new(SystemClock), Arc::new(ConsoleNotifier::new())),
    );

    println!("\n>>> Remplissage du formulaire");
    let field_edits = [
        (Field::LastName, "Dupont"),
        (Field::FirstName, "Michel"),
        (Field::Email, "michel.dupont@example.fr"),
        (Field::Phone, "06 12 34 56 78"),
        (Field::Message, "Disponible le mercredi uniquement."),
    ];
    for (field, value) in field_edits {
        store
            .send(RegistrationAction::FieldChanged {
                field,
                value: value.to_string(),
            })
            .await?
            .wait()
            .await?;
    }

    // Archery for two, plus yoga
    let archery = &sections[0];
    for _ in 0..2 {
        store
            .send(RegistrationAction::AddSection {
                id: archery.id,
                name: archery.name.clone(),
                unit_price: archery.unit_price,
            })
            .await?
            .wait()
            .await?;
    }
    let yoga = &sections[8];
    store
        .send(RegistrationAction::AddSection {
            id: yoga.id,
            name: yoga.name.clone(),
            unit_price: yoga.unit_price,
        })
        .await?
        .wait()
        .await?;

    // One new license, one renewal
    store
        .send(RegistrationAction::SetRenewalLicenseCount { count: 1 })
        .await?
        .wait()
        .await?;

    store
        .send(RegistrationAction::AttachmentSelected {
            name: "certificat-medical.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size_bytes: 245_000,
        })
        .await?
        .wait()
        .await?;

    let totals = store.state(RegistrationState::totals).await;
    println!("\nRécapitulatif:");
    println!("  Sections:  {}", format_eur(totals.sections_subtotal));
    println!("  Licences:  {}", format_eur(totals.license_subtotal));
    println!("  Total:     {}", format_eur(totals.grand_total));

    // ---- Submission ----
    println!("\n>>> Envoi de l'inscription");
    let handle = store.send(RegistrationAction::Submit).await?;

    // The cascade covers delivery, the success banner, and the 2 s auto-close
    handle.wait().await?;

    let state = store.state(Clone::clone).await;
    if state == RegistrationState::default() {
        println!("\nFormulaire réinitialisé après confirmation.");
    }

    sessions.clear();
    store.shutdown(Duration::from_secs(5)).await?;

    println!("\n=== Demo Complete ===");
    Ok(())
}
