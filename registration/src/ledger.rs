//! Selection ledger: the ordered list of sections being registered for.
//!
//! Adding a section that is already selected bumps its quantity instead of
//! duplicating the line. Insertion order is preserved so the summary reads
//! in the order the member picked.

use csa_catalog::SectionId;
use serde::{Deserialize, Serialize};

/// One selected section with its headcount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Section identifier
    pub id: SectionId,
    /// Section name, as shown in the summary
    pub name: String,
    /// Annual price per person in euros
    pub unit_price: f64,
    /// Number of people registering for this section, at least 1
    pub quantity: u32,
}

impl LineItem {
    /// Price for this line (`unit_price * quantity`), full precision
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Ordered collection of selected sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionLedger {
    items: Vec<LineItem>,
}

impl SelectionLedger {
    /// Create an empty ledger
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a section, merging with an existing line by id
    ///
    /// A section already in the ledger gets `quantity + 1`; a new section is
    /// appended with quantity 1. Returns the affected section id so callers
    /// can highlight the line.
    pub fn add(&mut self, id: SectionId, name: &str, unit_price: f64) -> SectionId {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity += 1;
        } else {
            self.items.push(LineItem {
                id,
                name: name.to_string(),
                unit_price,
                quantity: 1,
            });
        }
        id
    }

    /// Remove a section; absent ids are a no-op
    pub fn remove(&mut self, id: SectionId) {
        self.items.retain(|item| item.id != id);
    }

    /// Set the headcount for a section
    ///
    /// Quantities below 1 are rejected (no-op), as is an absent id.
    pub fn set_quantity(&mut self, id: SectionId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    /// Whether any section is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected sections (lines, not headcount)
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The selected lines in insertion order
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archery() -> (SectionId, &'static str, f64) {
        (SectionId(1), "Tir à l'Arc", 180.0)
    }

    fn running() -> (SectionId, &'static str, f64) {
        (SectionId(3), "Course à pied", 120.0)
    }

    #[test]
    fn adding_twice_merges_into_one_line() {
        let mut ledger = SelectionLedger::new();
        let (id, name, price) = archery();

        let first = ledger.add(id, name, price);
        let second = ledger.add(id, name, price);

        assert_eq!(first, id);
        assert_eq!(second, id);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0].quantity, 2);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut ledger = SelectionLedger::new();
        let (a_id, a_name, a_price) = archery();
        let (r_id, r_name, r_price) = running();

        ledger.add(a_id, a_name, a_price);
        ledger.add(r_id, r_name, r_price);

        let names: Vec<&str> = ledger.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tir à l'Arc", "Course à pied"]);
    }

    #[test]
    fn set_quantity_below_one_is_a_no_op() {
        let mut ledger = SelectionLedger::new();
        let (id, name, price) = archery();
        ledger.add(id, name, price);

        ledger.set_quantity(id, 0);

        assert_eq!(ledger.items()[0].quantity, 1);
    }

    #[test]
    fn set_quantity_for_absent_id_is_a_no_op() {
        let mut ledger = SelectionLedger::new();
        let (id, name, price) = archery();
        ledger.add(id, name, price);

        ledger.set_quantity(SectionId(99), 5);

        assert_eq!(ledger.items()[0].quantity, 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_deletes_the_line() {
        let mut ledger = SelectionLedger::new();
        let (a_id, a_name, a_price) = archery();
        let (r_id, r_name, r_price) = running();
        ledger.add(a_id, a_name, a_price);
        ledger.add(r_id, r_name, r_price);

        ledger.remove(a_id);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.items()[0].id, r_id);
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut ledger = SelectionLedger::new();
        let (id, name, price) = archery();
        ledger.add(id, name, price);

        ledger.remove(SectionId(99));

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        let item = LineItem {
            id: SectionId(9),
            name: "Yoga".to_string(),
            unit_price: 210.0,
            quantity: 3,
        };
        assert_eq!(item.subtotal(), 630.0);
    }
}
