// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Card not found: {0}")]
    CardNotFound(String),
    #[error("Duplicate card id: {0}")]
    DuplicateCardId(String),
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}
