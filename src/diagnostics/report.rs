use crate::cleanup::RemovalMode;
use crate::diagnostics::TimingBreakdown;
use crate::spacing::{Bin, Peak};
use crate::types::{Axis, SpacingResult};
use serde::Serialize;
use std::io::{self, Write};

/// Result produced by [`SpacingAnalyzer::analyze`](crate::SpacingAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingReport {
    pub result: SpacingResult,
    pub input: InputDescriptor,
    pub cleanup: CleanupStage,
    pub components: ComponentStage,
    pub graph: GraphStage,
    pub horizontal: DirectionReport,
    pub vertical: DirectionReport,
    pub unclassified_edges: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PipelineWarning>,
    pub timing: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub ink_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupStage {
    pub modes: Vec<RemovalMode>,
    pub examined: usize,
    pub removed: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStage {
    pub components: usize,
    pub centroids: usize,
    pub degenerate: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_height: Option<f32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStage {
    pub nodes: usize,
    pub k_effective: usize,
    pub candidate_edges: usize,
    pub tree_edges: usize,
    pub components: usize,
}

/// Spacing statistics along one axis.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionReport {
    pub axis: Axis,
    pub edge_count: usize,
    pub spacings_kept: usize,
    pub spacings_rejected: usize,
    pub histogram_by_count: Vec<Bin>,
    pub peaks: Vec<Peak>,
    pub dominant_spacings: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_extent: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gap_estimates: Vec<f32>,
}

/// Non-fatal conditions met while analyzing a page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PipelineWarning {
    /// Fewer than two usable components; no spacing estimate is possible.
    DegenerateInput { centroids: usize },
}

fn format_optional(val: Option<f32>) -> String {
    val.map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

impl SpacingReport {
    /// Writes the human-readable summary to stdout.
    pub fn print_text_summary(&self) -> io::Result<()> {
        self.write_text_summary(&mut io::stdout().lock())
    }

    pub fn write_text_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Spacing summary")?;
        writeln!(
            out,
            "  input: {}x{} ink={}",
            self.input.width, self.input.height, self.input.ink_pixels
        )?;
        writeln!(
            out,
            "  cleanup: removed {}/{} components ({:?})",
            self.cleanup.removed, self.cleanup.examined, self.cleanup.modes
        )?;
        writeln!(
            out,
            "  components: {} centroids={} degenerate={} mean_w={} mean_h={}",
            self.components.components,
            self.components.centroids,
            self.components.degenerate,
            format_optional(self.components.mean_width),
            format_optional(self.components.mean_height)
        )?;
        writeln!(
            out,
            "  graph: k={} candidates={} tree_edges={} components={}",
            self.graph.k_effective,
            self.graph.candidate_edges,
            self.graph.tree_edges,
            self.graph.components
        )?;
        for dir in [&self.horizontal, &self.vertical] {
            writeln!(
                out,
                "  {:?}: edges={} kept={} rejected={} dominant={:?} gaps={:?}",
                dir.axis,
                dir.edge_count,
                dir.spacings_kept,
                dir.spacings_rejected,
                dir.dominant_spacings,
                dir.gap_estimates
            )?;
        }
        writeln!(out, "  unclassified edges: {}", self.unclassified_edges)?;
        for warning in &self.warnings {
            writeln!(out, "  warning: {:?}", warning)?;
        }
        let stages: Vec<String> = self
            .timing
            .stages
            .iter()
            .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
            .collect();
        writeln!(
            out,
            "\nTimings (ms): {} total={:.3}",
            stages.join(" "),
            self.timing.total_ms
        )?;
        Ok(())
    }
}
