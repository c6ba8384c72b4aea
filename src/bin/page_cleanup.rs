use spacing_graph::cleanup::remove_components_multi;
use spacing_graph::config::cleanup;
use spacing_graph::image::io::{load_grayscale_image, save_binary_image, write_json_file};
use spacing_graph::preprocess::{prepare_for_deskew, Rlsa};
use std::env;
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
    let config = cleanup::load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let binary = config
        .binarization
        .binarize(&gray)
        .map_err(|e| e.to_string())?;

    let (cleaned, stats) = remove_components_multi(&binary, &config.modes, &config.thresholds);
    println!(
        "Removed {}/{} components ({:?})",
        stats.removed, stats.examined, config.modes
    );

    let page = match &config.deskew_preparation {
        Some(params) => prepare_for_deskew(&cleaned, &Rlsa, params),
        None => cleaned,
    };

    save_binary_image(&page, &config.output.cleaned_png)?;
    println!("Cleaned page written to {}", config.output.cleaned_png.display());

    if let Some(path) = &config.output.stats_json {
        write_json_file(path, &stats)?;
        println!("Cleanup stats written to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: page_cleanup <config.json>".to_string()
}
