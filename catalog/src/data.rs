//! Bundled section data
//!
//! The nine sections the club currently runs, as published on its site.
//! Copy is kept verbatim (French), including the loosely structured pricing
//! lines the adapter normalizes.

use crate::section::{RawSection, SectionId};

/// The club's published sections
#[must_use]
pub fn club_sections() -> Vec<RawSection> {
    vec![
        RawSection {
            id: SectionId(1),
            name: "Tir à l'Arc".to_string(),
            category: "sport".to_string(),
            description: "Développez votre précision et votre concentration dans notre section de tir à l'arc, ouverte aux débutants comme aux archers confirmés.".to_string(),
            schedule: "Mardi et Jeudi 18h-20h".to_string(),
            location: None,
            pricing: vec![
                "Adhésion annuelle: 180€".to_string(),
                "Tarif réduit (étudiants, chômeurs): 140€".to_string(),
                "Licence compétition: +30€".to_string(),
            ],
        },
        RawSection {
            id: SectionId(2),
            name: "Couture".to_string(),
            category: "art".to_string(),
            description: "Apprenez à coudre vos propres créations, de la réparation simple aux projets plus complexes, dans une ambiance conviviale et créative.".to_string(),
            schedule: "Lundi 14h-17h, Samedi 10h-12h".to_string(),
            location: None,
            pricing: vec![
                "Adhésion annuelle: 160€".to_string(),
                "Matériaux de base inclus".to_string(),
                "Tarif famille (à partir de 2 personnes): -10%".to_string(),
            ],
        },
        RawSection {
            id: SectionId(3),
            name: "Course à pied".to_string(),
            category: "sport".to_string(),
            description: "Rejoignez notre groupe de coureurs pour des entraînements adaptés à votre niveau et préparez ensemble des événements sportifs locaux.".to_string(),
            schedule: "Mercredi 18h30, Dimanche 9h30".to_string(),
            location: None,
            pricing: vec![
                "Adhésion annuelle: 120€".to_string(),
                "Tenue du club (optionnelle): 40€".to_string(),
            ],
        },
        RawSection {
            id: SectionId(4),
            name: "Photographie".to_string(),
            category: "art".to_string(),
            description: "Perfectionnez votre technique photographique et partagez votre passion lors de sorties thématiques et d'ateliers pratiques.".to_string(),
            schedule: "Jeudi 19h, un weekend par mois".to_string(),
            location: None,
            pricing: vec![],
        },
        RawSection {
            id: SectionId(5),
            name: "Natation".to_string(),
            category: "sport".to_string(),
            description: "De l'apprentissage au perfectionnement, nos maîtres-nageurs vous accompagnent pour progresser à votre rythme dans une ambiance détendue.".to_string(),
            schedule: "Lundi, Mercredi, Vendredi 19h-21h".to_string(),
            location: None,
            pricing: vec![],
        },
        RawSection {
            id: SectionId(6),
            name: "Théâtre".to_string(),
            category: "art".to_string(),
            description: "Explorez votre créativité, développez votre confiance en vous et vivez l'expérience unique de la scène avec notre troupe de théâtre.".to_string(),
            schedule: "Mardi 19h-21h30".to_string(),
            location: None,
            pricing: vec![],
        },
        RawSection {
            id: SectionId(7),
            name: "Tennis".to_string(),
            category: "sport".to_string(),
            description: "Du mini-tennis à la compétition, notre section vous propose des cours adaptés et des terrains disponibles pour jouer librement.".to_string(),
            schedule: "Du lundi au samedi, horaires variés".to_string(),
            location: None,
            pricing: vec![],
        },
        RawSection {
            id: SectionId(8),
            name: "Peinture".to_string(),
            category: "art".to_string(),
            description: "Initiez-vous aux différentes techniques picturales ou perfectionnez votre style dans une ambiance détendue et inspirante.".to_string(),
            schedule: "Mercredi 16h-18h, Samedi 14h-17h".to_string(),
            location: None,
            pricing: vec![],
        },
        RawSection {
            id: SectionId(9),
            name: "Yoga".to_string(),
            category: "bien-être".to_string(),
            description: "Retrouvez équilibre et sérénité avec nos cours de yoga adaptés à tous les niveaux, pour un bien-être physique et mental.".to_string(),
            schedule: "Lundi et Jeudi 12h-13h, Mardi 19h-20h30".to_string(),
            location: None,
            pricing: vec![
                "Adhésion annuelle: 210€".to_string(),
                "Carte 10 séances: 120€".to_string(),
                "Séance découverte gratuite".to_string(),
            ],
        },
    ]
}
