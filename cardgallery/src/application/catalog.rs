// src/application/catalog.rs
use crate::domain::{Card, DomainError};

/// Read-only access to the loaded card collection.
pub trait CardRepository {
    /// All cards in dataset order.
    fn all_cards(&self) -> &[Card];

    fn get_card(&self, id: &str) -> Result<&Card, DomainError> {
        self.all_cards()
            .iter()
            .find(|card| card.id == id)
            .ok_or_else(|| DomainError::CardNotFound(id.to_string()))
    }
}

impl CardRepository for [Card] {
    fn all_cards(&self) -> &[Card] {
        self
    }
}

impl CardRepository for Vec<Card> {
    fn all_cards(&self) -> &[Card] {
        self
    }
}

/// Keep the cards whose name contains `query`, ignoring case.
///
/// Matching cards keep their relative order; an empty query keeps everything.
pub fn filter_cards<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let needle = query.to_lowercase();
    cards
        .iter()
        .filter(|card| card.name_matches(&needle))
        .collect()
}
