//! Section types and the raw-data-to-catalog adapter
//!
//! The club publishes its sections as loosely structured copy: free-text
//! categories and human-readable pricing lines such as
//! `"Adhésion annuelle: 180€"`. This module normalizes that copy into typed
//! catalog entries the registration engine can price against.

use serde::{Deserialize, Serialize};

/// Default annual membership price, in euros, applied when a section's
/// pricing copy carries no parseable amount.
pub const DEFAULT_UNIT_PRICE: f64 = 180.0;

/// Identifier of a club section
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SectionId(pub u32);

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Activity category of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Sports activities (archery, running, swimming, tennis)
    Sport,
    /// Arts and crafts (sewing, photography, theater, painting)
    Art,
    /// Wellness activities (yoga)
    Wellness,
    /// Anything the club copy doesn't classify
    Other,
}

impl Category {
    /// Parse a category from the club's free-text label
    ///
    /// Unrecognized labels fall back to [`Category::Other`] rather than
    /// erroring; the catalog must always render.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "sport" => Self::Sport,
            "art" => Self::Art,
            "bien-être" => Self::Wellness,
            _ => Self::Other,
        }
    }

    /// Presentation style tokens for this category
    #[must_use]
    pub const fn style_tokens(self) -> StyleTokens {
        match self {
            Self::Sport => StyleTokens {
                badge_bg: "emerald-100",
                badge_text: "emerald-800",
                accent: "emerald-500",
                hover_accent: "emerald-600",
            },
            Self::Art => StyleTokens {
                badge_bg: "amber-100",
                badge_text: "amber-800",
                accent: "amber-500",
                hover_accent: "amber-600",
            },
            Self::Wellness => StyleTokens {
                badge_bg: "violet-100",
                badge_text: "violet-800",
                accent: "violet-500",
                hover_accent: "violet-600",
            },
            Self::Other => StyleTokens {
                badge_bg: "blue-100",
                badge_text: "blue-800",
                accent: "blue-600",
                hover_accent: "blue-700",
            },
        }
    }
}

/// Theme tokens a renderer uses to style a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTokens {
    /// Badge background token
    pub badge_bg: &'static str,
    /// Badge text token
    pub badge_text: &'static str,
    /// Primary accent token
    pub accent: &'static str,
    /// Accent token in hovered state
    pub hover_accent: &'static str,
}

/// A section as published in the club's data files
///
/// Pricing is a list of human-readable lines; the first line carries the
/// annual membership price when one is advertised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSection {
    /// Section identifier
    pub id: SectionId,
    /// Display name (French)
    pub name: String,
    /// Free-text category label
    pub category: String,
    /// Short description shown on section cards
    pub description: String,
    /// Weekly schedule copy
    pub schedule: String,
    /// Venue, when the copy names one
    pub location: Option<String>,
    /// Human-readable pricing lines
    pub pricing: Vec<String>,
}

/// A section normalized for the registration engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Section identifier
    pub id: SectionId,
    /// Display name (French)
    pub name: String,
    /// Annual membership price in euros
    pub unit_price: f64,
    /// Parsed activity category
    pub category: Category,
    /// Weekly schedule copy
    pub schedule: String,
    /// Venue, when the copy names one
    pub location: Option<String>,
    /// Short description
    pub description: String,
}

/// Normalize a raw section into a catalog entry
///
/// The unit price is read from the first pricing line's trailing `NNN€`
/// token. Sections with no pricing copy, or copy without an amount, get
/// [`DEFAULT_UNIT_PRICE`]; the adapter never fails.
#[must_use]
pub fn adapt(raw: &RawSection) -> CatalogSection {
    let unit_price = raw
        .pricing
        .first()
        .and_then(|line| parse_trailing_euros(line))
        .unwrap_or_else(|| {
            tracing::debug!(
                section_id = %raw.id,
                section_name = %raw.name,
                fallback = DEFAULT_UNIT_PRICE,
                "No parseable price in section copy, using default"
            );
            DEFAULT_UNIT_PRICE
        });

    CatalogSection {
        id: raw.id,
        name: raw.name.clone(),
        unit_price,
        category: Category::parse(&raw.category),
        schedule: raw.schedule.clone(),
        location: raw.location.clone(),
        description: raw.description.clone(),
    }
}

/// Extract the amount from a pricing line ending in `NNN€`
fn parse_trailing_euros(line: &str) -> Option<f64> {
    let before_sign = line.trim_end().strip_suffix('€')?;
    let prefix = before_sign.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &before_sign[prefix.len()..];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pricing: Vec<&str>) -> RawSection {
        RawSection {
            id: SectionId(1),
            name: "Tir à l'Arc".to_string(),
            category: "sport".to_string(),
            description: "Développez votre précision".to_string(),
            schedule: "Mardi et Jeudi 18h-20h".to_string(),
            location: None,
            pricing: pricing.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn parses_price_from_first_pricing_line() {
        let section = adapt(&raw(vec![
            "Adhésion annuelle: 180€",
            "Tarif réduit (étudiants, chômeurs): 140€",
        ]));
        assert_eq!(section.unit_price, 180.0);
    }

    #[test]
    fn falls_back_when_pricing_is_empty() {
        let section = adapt(&raw(vec![]));
        assert_eq!(section.unit_price, DEFAULT_UNIT_PRICE);
    }

    #[test]
    fn falls_back_when_first_line_has_no_amount() {
        let section = adapt(&raw(vec!["Matériaux de base inclus"]));
        assert_eq!(section.unit_price, DEFAULT_UNIT_PRICE);
    }

    #[test]
    fn ignores_amounts_in_later_lines() {
        let section = adapt(&raw(vec!["Séance découverte gratuite", "Carte 10 séances: 120€"]));
        assert_eq!(section.unit_price, DEFAULT_UNIT_PRICE);
    }

    #[test]
    fn parses_price_with_trailing_whitespace() {
        assert_eq!(parse_trailing_euros("Adhésion annuelle: 210€  "), Some(210.0));
    }

    #[test]
    fn rejects_bare_euro_sign() {
        assert_eq!(parse_trailing_euros("Tarif: €"), None);
    }

    #[test]
    fn category_parse_known_labels() {
        assert_eq!(Category::parse("sport"), Category::Sport);
        assert_eq!(Category::parse("art"), Category::Art);
        assert_eq!(Category::parse("bien-être"), Category::Wellness);
        assert_eq!(Category::parse(" Sport "), Category::Sport);
    }

    #[test]
    fn category_parse_unknown_label_is_other() {
        assert_eq!(Category::parse("musique"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
    }

    #[test]
    fn style_tokens_differ_per_category() {
        let sport = Category::Sport.style_tokens();
        let art = Category::Art.style_tokens();
        let wellness = Category::Wellness.style_tokens();
        let other = Category::Other.style_tokens();
        assert_eq!(sport.accent, "emerald-500");
        assert_eq!(art.accent, "amber-500");
        assert_eq!(wellness.accent, "violet-500");
        assert_eq!(other.accent, "blue-600");
    }
}
