// src/infrastructure/dataset.rs
use crate::application::CardRepository;
use crate::domain::{Card, DomainError};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Card collection loaded from a JSON array, indexed by id.
#[derive(Debug, Clone)]
pub struct JsonCardRepository {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
}

impl JsonCardRepository {
    /// Load and validate the dataset at `path`.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read card dataset {}", path.display()))?;

        let repository = Self::from_json(&content)
            .with_context(|| format!("Failed to load card dataset {}", path.display()))?;

        info!(cards = repository.len(), path = %path.display(), "Loaded card dataset");
        Ok(repository)
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let cards: Vec<Card> =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidDataset(e.to_string()))?;
        Self::from_cards(cards)
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(cards.len());

        for (position, card) in cards.iter().enumerate() {
            if card.id.is_empty() {
                return Err(DomainError::InvalidDataset(format!(
                    "card at position {position} has an empty id"
                )));
            }
            if index.insert(card.id.clone(), position).is_some() {
                return Err(DomainError::DuplicateCardId(card.id.clone()));
            }
        }

        debug!(cards = cards.len(), "Validated card dataset");
        Ok(Self { cards, index })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardRepository for JsonCardRepository {
    fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    fn get_card(&self, id: &str) -> Result<&Card, DomainError> {
        self.index
            .get(id)
            .map(|&position| &self.cards[position])
            .ok_or_else(|| DomainError::CardNotFound(id.to_string()))
    }
}
