use spacing_graph::config::spacing::{self, SpacingToolConfig};
use spacing_graph::image::io::{load_grayscale_image, save_rgb_image, write_json_file};
use spacing_graph::render::{
    draw_classified_edges, draw_component_boxes, page_canvas, MIN_BOX_SIDE,
};
use spacing_graph::{SpacingAnalysis, SpacingAnalyzer};
use std::env;
use std::io;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = spacing::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let binary = config
        .binarization
        .binarize(&gray)
        .map_err(|e| e.to_string())?;

    let analyzer = SpacingAnalyzer::new(config.params.clone());
    let analysis = analyzer
        .analyze_detailed(&binary)
        .map_err(|e| e.to_string())?;

    if config.output.summary {
        // Keep stdout clean for the JSON report when it is not written to a file.
        let summary = if config.output.report_json.is_some() {
            analysis.report.print_text_summary()
        } else {
            analysis.report.write_text_summary(&mut io::stderr().lock())
        };
        summary.map_err(|e| format!("Failed to write summary: {e}"))?;
    }
    write_outputs(&config, &analysis)
}

fn write_outputs(config: &SpacingToolConfig, analysis: &SpacingAnalysis) -> Result<(), String> {
    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &analysis.report)?;
            println!("JSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&analysis.report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("{json}");
        }
    }

    if let Some(path) = &config.output.overlay_png {
        let mut canvas = page_canvas(&analysis.cleaned);
        draw_component_boxes(&mut canvas, &analysis.components, MIN_BOX_SIDE);
        draw_classified_edges(&mut canvas, &analysis.edges, &analysis.points);
        save_rgb_image(&canvas, path)?;
        println!("Overlay written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: spacing_analyze <config.json>".to_string()
}
