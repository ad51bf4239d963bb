//! Snapshot command-line tool
//!
//! Loads a RON scene description, exports the character composition
//! snapshot, and writes `<display name><timestamp>.json` under the
//! configured output root.

use std::env;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use chara_export::config::ExportConfig;
use chara_export::export::{write_snapshot, Exporter};
use chara_export::scene::SceneDescription;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(scene_path), Some(display_name)) = (args.next(), args.next()) else {
        eprintln!("usage: snapshot_app <scene.ron> <display-name> [config.toml]");
        return ExitCode::FAILURE;
    };

    let config = match args.next() {
        Some(path) => match ExportConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(error) => {
                log::error!("failed to load config {path}: {error}");
                return ExitCode::FAILURE;
            }
        },
        None => ExportConfig::default(),
    };

    match run(&scene_path, &display_name, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("export failed: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(scene_path: &str, display_name: &str, config: &ExportConfig) -> Result<(), Box<dyn Error>> {
    log::info!("loading scene description from {scene_path}");
    let description = SceneDescription::from_file(Path::new(scene_path))?;
    let (scene, root) = description.build()?;
    log::info!(
        "scene loaded: {} nodes, {} surfaces, {} materials",
        scene.node_count(),
        scene.surface_count(),
        scene.material_count()
    );

    let document = Exporter::new().export(&scene, root, display_name);

    config.ensure_output_root()?;
    let prefix = format!("{display_name}{}", coarse_timestamp());
    let path = config.output_path(&prefix);
    write_snapshot(&document, &path)?;
    log::info!("snapshot written to {}", path.display());
    Ok(())
}

/// Coarse timestamp suffix: whole seconds since the Unix epoch
fn coarse_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}
