// src/domain/mod.rs
pub mod card;
pub mod error;

pub use card::Card;
pub use error::DomainError;
