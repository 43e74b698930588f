// src/constants.rs
//
// Application-wide defaults and timings.

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cardgallery.toml";

/// Card dataset location used when neither config nor flags name one.
pub const DEFAULT_CARDS_FILE: &str = "data/cards.json";

/// Directory that root-relative `img`/`photo` locators resolve against.
pub const DEFAULT_ASSETS_DIR: &str = "public";

/// Address `serve` binds to by default.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Delay in milliseconds after launching the browser before returning.
///
/// The rendered pages live in a temporary directory that is removed when the
/// process exits, so the browser needs a moment to load them first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Maximum characters of the meaning shown per card by `list`.
pub const LIST_SUMMARY_CHARS: usize = 60;
