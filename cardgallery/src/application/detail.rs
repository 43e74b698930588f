// src/application/detail.rs
use crate::application::catalog::CardRepository;
use crate::application::router::Route;
use crate::domain::{Card, DomainError};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail<'a> {
    pub card: &'a Card,
    pub paragraphs: Vec<&'a str>,
    /// Only set when the card has an original photo.
    pub photo: Option<&'a str>,
    pub back: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPage<'a> {
    Found(CardDetail<'a>),
    NotFound { id: String, back: Route },
}

impl DetailPage<'_> {
    pub fn not_found(id: impl Into<String>) -> Self {
        DetailPage::NotFound {
            id: id.into(),
            back: Route::Root,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DetailPage::Found(_))
    }
}

/// Looks up a single card by exact id.
pub struct DetailView<'a, R: CardRepository + ?Sized> {
    repository: &'a R,
}

impl<'a, R: CardRepository + ?Sized> DetailView<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub fn show(&self, id: &str) -> DetailPage<'a> {
        match self.repository.get_card(id) {
            Ok(card) => {
                debug!(card_id = %card.id, "Showing card detail");
                DetailPage::Found(CardDetail {
                    card,
                    paragraphs: card.meaning_paragraphs(),
                    photo: card.photo.as_deref(),
                    back: Route::Root,
                })
            }
            Err(DomainError::CardNotFound(missing)) => {
                debug!(card_id = %missing, "Card not found");
                DetailPage::not_found(missing)
            }
            Err(err) => {
                warn!(%err, card_id = id, "Card lookup failed");
                DetailPage::not_found(id)
            }
        }
    }
}
