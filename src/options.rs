//! Ribbon generation options with TOML preset support.
//!
//! All tweakable settings (radii, tessellation density, tube toggle,
//! chain-break policy) are consolidated here. Options serialize to/from
//! TOML so callers can store presets next to their own configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlicoError;

/// How the backbone path treats a change of chain identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChainBreaks {
    /// Start a new backbone path at every chain change, so no segment
    /// joins the end of one chain to the start of the next.
    #[default]
    Split,
    /// Keep every point in a single path, joining consecutive
    /// alpha-carbons across chain boundaries. This reproduces the source
    /// material's behavior, spurious cross-chain segment included.
    Connect,
}

/// Geometry options for backbone ribbon generation.
///
/// Uses `#[serde(default)]` so partial TOML files (e.g. only overriding
/// `helix_radius`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RibbonOptions {
    /// Tube radius for helix runs, in angstroms.
    pub helix_radius: f32,
    /// Tube radius for sheet runs, in angstroms.
    pub sheet_radius: f32,
    /// Number of vertices around each tube cross-section. Values below 3
    /// are clamped at use site.
    pub cross_section_verts: usize,
    /// Centerline samples per control-point span. Values below 1 are
    /// clamped at use site.
    pub segments_per_point: usize,
    /// Whether helix/sheet runs are meshed as tubes at all. When false
    /// only the backbone polyline is emitted.
    pub tube_enabled: bool,
    /// Chain-break policy for the backbone path.
    pub chain_breaks: ChainBreaks,
}

impl Default for RibbonOptions {
    fn default() -> Self {
        Self {
            helix_radius: 0.8,
            sheet_radius: 0.5,
            cross_section_verts: 8,
            segments_per_point: 2,
            tube_enabled: true,
            chain_breaks: ChainBreaks::Split,
        }
    }
}

impl RibbonOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PlicoError> {
        let content = std::fs::read_to_string(path).map_err(PlicoError::Io)?;
        toml::from_str(&content)
            .map_err(|e| PlicoError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PlicoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlicoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlicoError::Io)?;
        }
        std::fs::write(path, content).map_err(PlicoError::Io)
    }
}
