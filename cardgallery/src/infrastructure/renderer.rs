// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use crate::ports::SitePage;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, info, instrument};

/// Writes rendered pages to disk and hands them to the browser.
#[derive(Debug, Default)]
pub struct ContentRenderer {
    // Keep last temp dir alive to prevent deletion
    _temp_dir: Option<TempDir>,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self { _temp_dir: None }
    }

    /// Write `pages` below `root`, creating directories as needed.
    #[instrument(level = "debug", skip(pages), fields(count = pages.len()))]
    pub fn write_site(root: &Path, pages: &[SitePage]) -> Result<()> {
        for page in pages {
            let file_path = root.join(&page.path);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::write(&file_path, page.html.as_bytes())
                .with_context(|| format!("Failed to write page {}", file_path.display()))?;
            debug!(path = %file_path.display(), "Wrote page");
        }
        info!(root = %root.display(), pages = pages.len(), "Site written");
        Ok(())
    }

    /// Write `pages` into a fresh temporary directory and return its path.
    pub fn create_temp_site(&mut self, pages: &[SitePage]) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("cardgallery-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let root = temp_dir.path().to_path_buf();
        Self::write_site(&root, pages)?;

        // Store temp_dir to keep it alive
        self._temp_dir = Some(temp_dir);

        Ok(root)
    }

    #[instrument(level = "debug")]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // Give the browser time to read the file before the temp dir goes away
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}
