//! Events calendar data and filtering
//!
//! The club publishes a yearly calendar of competitions, shows, and open
//! days. Filtering combines month, section, and free-text search; the
//! grouped view orders months the way the calendar does.

use serde::{Deserialize, Serialize};

/// French month labels in calendar order
pub const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// A club event as published on the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubEvent {
    /// Event identifier
    pub id: u32,
    /// Event title (French)
    pub title: String,
    /// Organizing section name, or "Toutes sections"
    pub section: String,
    /// Short description
    pub description: String,
    /// Human-readable date, e.g. "15 mars" or "10-11 juillet"
    pub date: String,
    /// Month label, lowercase French
    pub month: String,
    /// Venue
    pub location: String,
}

/// Filter criteria for the events calendar
///
/// All set criteria must match (AND). Search is case-insensitive over
/// title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Keep only events in this month
    pub month: Option<String>,
    /// Keep only events organized by this section
    pub section: Option<String>,
    /// Keep only events whose title or description contains this text
    pub search: Option<String>,
}

impl EventFilter {
    /// Filter criteria matching everything
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a month
    #[must_use]
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Restrict to a section
    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Restrict to events matching a search term
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Apply the filter, preserving calendar data order
    #[must_use]
    pub fn apply<'a>(&self, events: &'a [ClubEvent]) -> Vec<&'a ClubEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }

    fn matches(&self, event: &ClubEvent) -> bool {
        let match_month = self
            .month
            .as_ref()
            .is_none_or(|month| event.month == *month);
        let match_section = self
            .section
            .as_ref()
            .is_none_or(|section| event.section == *section);
        let match_search = self.search.as_ref().is_none_or(|term| {
            let term = term.to_lowercase();
            event.title.to_lowercase().contains(&term)
                || event.description.to_lowercase().contains(&term)
        });

        match_month && match_section && match_search
    }
}

/// Group events by month in calendar order, omitting empty months
#[must_use]
pub fn group_by_month<'a>(events: &[&'a ClubEvent]) -> Vec<(&'static str, Vec<&'a ClubEvent>)> {
    MONTHS
        .iter()
        .filter_map(|&month| {
            let in_month: Vec<&ClubEvent> = events
                .iter()
                .filter(|e| e.month == month)
                .copied()
                .collect();
            if in_month.is_empty() {
                None
            } else {
                Some((month, in_month))
            }
        })
        .collect()
}

/// The club's published events calendar
#[must_use]
pub fn club_events() -> Vec<ClubEvent> {
    vec![
        ClubEvent {
            id: 1,
            title: "Concours de Tir à l'Arc".to_string(),
            section: "Tir à l'arc".to_string(),
            description: "Participez à notre concours annuel ouvert à tous les membres de la section tir à l'arc.".to_string(),
            date: "15 mars".to_string(),
            month: "mars".to_string(),
            location: "Terrain municipal".to_string(),
        },
        ClubEvent {
            id: 2,
            title: "Exposition des Travaux de Couture".to_string(),
            section: "Couture".to_string(),
            description: "Venez découvrir les créations de nos talentueux couturiers et couturières lors de cette exposition annuelle.".to_string(),
            date: "22 avril".to_string(),
            month: "avril".to_string(),
            location: "Salle des fêtes".to_string(),
        },
        ClubEvent {
            id: 3,
            title: "Course Solidaire 5km".to_string(),
            section: "Course à pied".to_string(),
            description: "Course caritative dont les bénéfices seront reversés à une association locale. Ouverte à tous.".to_string(),
            date: "5 juin".to_string(),
            month: "juin".to_string(),
            location: "Parc municipal".to_string(),
        },
        ClubEvent {
            id: 4,
            title: "Stage Intensif de Photographie".to_string(),
            section: "Photographie".to_string(),
            description: "Un weekend complet dédié à l'apprentissage de techniques avancées avec un photographe professionnel.".to_string(),
            date: "10-11 juillet".to_string(),
            month: "juillet".to_string(),
            location: "CSA & extérieur".to_string(),
        },
        ClubEvent {
            id: 5,
            title: "Compétition de Natation Inter-clubs".to_string(),
            section: "Natation".to_string(),
            description: "Rencontre amicale avec les clubs voisins. Plusieurs catégories selon les niveaux et âges.".to_string(),
            date: "18 septembre".to_string(),
            month: "septembre".to_string(),
            location: "Piscine municipale".to_string(),
        },
        ClubEvent {
            id: 6,
            title: "Représentation Théâtrale".to_string(),
            section: "Théâtre".to_string(),
            description: "Notre troupe présente sa nouvelle pièce après des mois de répétition. Venez nombreux les encourager!".to_string(),
            date: "15-16 octobre".to_string(),
            month: "octobre".to_string(),
            location: "Théâtre municipal".to_string(),
        },
        ClubEvent {
            id: 7,
            title: "Tournoi de Tennis de Noël".to_string(),
            section: "Tennis".to_string(),
            description: "Tournoi festif et convivial pour clôturer l'année. Lots et buffet pour tous les participants.".to_string(),
            date: "18 décembre".to_string(),
            month: "décembre".to_string(),
            location: "Courts couverts du CSA".to_string(),
        },
        ClubEvent {
            id: 8,
            title: "Journée Portes Ouvertes".to_string(),
            section: "Toutes sections".to_string(),
            description: "Découvrez l'ensemble de nos activités et rencontrez nos animateurs lors de cette journée d'initiation.".to_string(),
            date: "5 septembre".to_string(),
            month: "septembre".to_string(),
            location: "Locaux du CSA".to_string(),
        },
    ]
}
