use serde::{Deserialize, Serialize};

/// Which class of non-text component the cleanup pass erases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemovalMode {
    /// Oversized components (pictures, diagrams).
    Figures,
    /// Tiny components (noise, specks).
    Spots,
    /// Tall thin components (vertical rules).
    LinesVertical,
    /// Wide flat components (horizontal rules, underlines).
    LinesHorizontal,
    /// Rules in either orientation.
    LinesBoth,
}

/// Size thresholds in pixels for the cleanup pass.
///
/// The values are resolution dependent; the defaults suit pages scanned at
/// roughly 300 dpi.
///
/// - figure: `width > figure_min_size || height > figure_min_size`
/// - spot: `width <= spot_max_size && height <= spot_max_size`
/// - rule: long side `> line_min_length` and short side `< line_max_thickness`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalThresholds {
    pub figure_min_size: u32,
    pub spot_max_size: u32,
    pub line_min_length: u32,
    pub line_max_thickness: u32,
}

impl Default for RemovalThresholds {
    fn default() -> Self {
        Self {
            figure_min_size: 300,
            spot_max_size: 8,
            line_min_length: 50,
            line_max_thickness: 20,
        }
    }
}
