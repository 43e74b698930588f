// src/util/testing.rs

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::CardRepository;
use crate::domain::Card;

/// The two-card collection used throughout the tests.
///
/// Card `2` has a photo and a two-line meaning, card `1` has neither.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card {
            id: "1".to_string(),
            name: "Il Professore".to_string(),
            img: "p1.png".to_string(),
            photo: None,
            meaning: "...".to_string(),
        },
        Card {
            id: "2".to_string(),
            name: "La Strega".to_string(),
            img: "p2.png".to_string(),
            photo: Some("ph2.jpg".to_string()),
            meaning: "Riga1\nRiga2".to_string(),
        },
    ]
}

/// In-memory repository for testing views that depend on CardRepository
///
/// # Examples
///
/// ```
/// use cardgallery::application::CardRepository;
/// use cardgallery::util::testing::MockCardRepository;
///
/// let mock = MockCardRepository::builder()
///     .with_card("1", "Il Professore", "p1.png", None, "...")
///     .build();
/// assert_eq!(mock.all_cards().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockCardRepository {
    cards: Vec<Card>,
}

impl MockCardRepository {
    pub fn builder() -> MockCardRepositoryBuilder {
        MockCardRepositoryBuilder::new()
    }
}

impl CardRepository for MockCardRepository {
    fn all_cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Builder for MockCardRepository
///
/// Cards keep the order in which they were added.
pub struct MockCardRepositoryBuilder {
    cards: Vec<Card>,
}

impl MockCardRepositoryBuilder {
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    pub fn with_card(
        mut self,
        id: &str,
        name: &str,
        img: &str,
        photo: Option<&str>,
        meaning: &str,
    ) -> Self {
        self.cards.push(Card {
            id: id.to_string(),
            name: name.to_string(),
            img: img.to_string(),
            photo: photo.map(str::to_string),
            meaning: meaning.to_string(),
        });
        self
    }

    pub fn with_sample_cards(mut self) -> Self {
        self.cards.extend(sample_cards());
        self
    }

    pub fn build(self) -> MockCardRepository {
        MockCardRepository { cards: self.cards }
    }
}

impl Default for MockCardRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "tower_http", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Honor RUST_LOG, default to debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
