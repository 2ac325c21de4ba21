//! # CSA Catalog
//!
//! Section catalog and events calendar for the CSA club.
//!
//! This crate provides:
//! - The raw section data as published by the club (French copy included)
//! - An adapter that turns raw sections into pricing-ready catalog entries
//! - Category classification with presentation style tokens
//! - The events calendar with month/section/search filtering
//!
//! ## Example
//!
//! ```
//! use csa_catalog::{adapt, club_sections};
//!
//! let sections = club_sections();
//! let archery = adapt(&sections[0]);
//! assert_eq!(archery.unit_price, 180.0);
//! ```

pub mod data;
pub mod events;
pub mod section;

pub use data::club_sections;
pub use events::{ClubEvent, EventFilter, MONTHS, club_events, group_by_month};
pub use section::{Category, CatalogSection, RawSection, SectionId, StyleTokens, adapt};
