//! Icon set generation
//!
//! Creates the output directory and renders one icon per configured size,
//! reporting progress as it goes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{IconError, IconStyle};
use crate::render::{IconRenderer, RenderedIcon};

/// Sizes required by the extension manifest, in render order
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Directory the icons are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const MISSING_CAPABILITY: i32 = 2;
}

/// What to generate and where
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    pub style: IconStyle,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            style: IconStyle::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

/// Path of the icon for `size` inside `dir`, e.g. `icons/icon48.png`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("icon{size}.png"))
}

/// Render every configured size, stopping at the first failure.
///
/// Icons written before a failure are left in place.
pub fn generate_icons<R, W>(
    config: &GeneratorConfig,
    renderer: &R,
    out: &mut W,
) -> Result<Vec<RenderedIcon>, IconError>
where
    R: IconRenderer + ?Sized,
    W: Write,
{
    fs::create_dir_all(&config.output_dir).map_err(|e| IconError::io(&config.output_dir, e))?;
    tracing::debug!("Output directory ready: {}", config.output_dir.display());

    let mut rendered = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = icon_path(&config.output_dir, size);
        let icon = renderer.render(size, &path)?;
        let _ = writeln!(out, "{}", icon);
        rendered.push(icon);
    }

    Ok(rendered)
}

/// Generate the icon set and report the outcome, returning the exit code
pub fn run<R, W>(config: &GeneratorConfig, renderer: &R, out: &mut W) -> i32
where
    R: IconRenderer + ?Sized,
    W: Write,
{
    let _ = writeln!(out, "Generating ScreenCut placeholder icons...");
    tracing::info!(
        "Generating {} icons into {}",
        config.sizes.len(),
        config.output_dir.display()
    );

    match generate_icons(config, renderer, out) {
        Ok(icons) => {
            tracing::info!("Generated {} icons", icons.len());
            let _ = writeln!(out, "Icon generation complete.");
            let _ = writeln!(out, "Reload the extension to pick up the new icons.");
            exit_codes::SUCCESS
        }
        Err(e) => {
            tracing::error!("Icon generation failed: {}", e);
            let _ = writeln!(out, "Error generating icons: {}", e);
            if let Some(hint) = e.remediation() {
                let _ = writeln!(out, "{}", hint);
            }
            categorize_error(&e)
        }
    }
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &IconError) -> i32 {
    if e.is_missing_capability() {
        exit_codes::MISSING_CAPABILITY
    } else {
        exit_codes::UNEXPECTED_FAILURE
    }
}
