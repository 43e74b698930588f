use anyhow::{Context, Result};
use cardgallery::infrastructure::JsonCardRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture holding a private copy of the card dataset
#[allow(dead_code)]
pub struct TestDataset {
    _temp_dir: TempDir,
    pub cards_path: PathBuf,
    pub assets_dir: PathBuf,
}

#[allow(dead_code)]
impl TestDataset {
    /// Create a new dataset by copying the fixture
    pub fn new() -> Result<Self> {
        let content = std::fs::read_to_string(Self::fixture_dir().join("cards.json"))
            .context("Failed to read cards fixture")?;
        Self::with_json(&content)
    }

    /// Create a dataset from raw JSON, e.g. to exercise load failures
    pub fn with_json(json: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let cards_path = temp_dir.path().join("cards.json");
        std::fs::write(&cards_path, json).context("Failed to write cards fixture")?;

        Ok(Self {
            _temp_dir: temp_dir,
            cards_path,
            assets_dir: Self::fixture_dir().join("public"),
        })
    }

    pub fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    /// Open repository for this dataset
    pub fn open_repository(&self) -> Result<JsonCardRepository> {
        JsonCardRepository::load(&self.cards_path)
    }
}

/// Known card IDs from the fixture dataset
#[allow(dead_code)]
pub mod test_cards {
    pub const PROFESSORE: &str = "1"; // No photo
    pub const STREGA: &str = "2"; // Has photo, two-line meaning
    pub const BIDELLO: &str = "bidello"; // External image URL, blank line in meaning

    // For testing error cases
    pub const NONEXISTENT: &str = "999";
}
