//! Replay harness for the region selection overlay
//!
//! Usage: regionsnap <capture-data.json> <events.json> [--render [out.png]] [--save-config]
//!
//! Capture data is loaded through the file backend, the recorded input
//! events are fed to the session in order, and the terminal response is
//! printed as JSON on stdout. With `--render` the final frame is written
//! to a PNG.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;

use regionsnap::domain::Size;
use regionsnap::input::parse_script;
use regionsnap::render::image::render_overlay;
use regionsnap::{CaptureSession, FileBackend, RegionSnapConfig};

/// Container size used when the virtual screen is unknown
const FALLBACK_CONTAINER: Size = Size {
    width: 1280.0,
    height: 720.0,
};

#[derive(Parser, Debug)]
#[command(
    name = "regionsnap",
    version,
    about = "Replay recorded input against the region selection overlay"
)]
struct Cli {
    /// Capture data JSON with the screenshot and virtual screen geometry
    capture_data: PathBuf,
    /// JSON array of recorded input events
    events: PathBuf,
    /// Render the final frame to a PNG (timestamped name when no path is given)
    #[arg(long, num_args = 0..=1, value_name = "OUT")]
    render: Option<Option<PathBuf>>,
    /// Write the effective configuration to the user config file
    #[arg(long, action = ArgAction::SetTrue)]
    save_config: bool,
}

impl Cli {
    fn render_path(&self) -> Option<PathBuf> {
        self.render
            .clone()
            .map(|path| path.unwrap_or_else(default_render_path))
    }
}

fn default_render_path() -> PathBuf {
    let name = chrono::Local::now()
        .format("regionsnap_%Y-%m-%d_%H-%M-%S.png")
        .to_string();
    PathBuf::from(name)
}

fn render_frame(
    session: &CaptureSession<FileBackend>,
    config: &RegionSnapConfig,
    path: &Path,
) -> anyhow::Result<()> {
    let state = session.state();
    let container = state.container_size().unwrap_or(FALLBACK_CONTAINER);
    let scale = state
        .backdrop
        .virtual_screen
        .map(|screen| screen.scale_factor)
        .unwrap_or(1.0);

    let view = session.view(container);
    log::info!("Hint: {}", view.hint);

    let img = render_overlay(&view, state.backdrop.background.as_ref(), config, scale)?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Rendered overlay to {}", path.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    regionsnap::localize::localize();

    let args = Cli::parse();
    let config = RegionSnapConfig::load();
    if args.save_config {
        config.save();
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = CaptureSession::new(FileBackend::new(&args.capture_data, tx), &config);
    session.mount().await;

    let raw = tokio::fs::read_to_string(&args.events)
        .await
        .with_context(|| format!("failed to read {}", args.events.display()))?;
    let events = parse_script(&raw)
        .with_context(|| format!("invalid event script in {}", args.events.display()))?;

    for event in &events {
        if session.is_finished() {
            log::debug!("Session finished, skipping remaining events");
            break;
        }
        session.handle_input(event);
    }

    if let Some(path) = args.render_path() {
        render_frame(&session, &config, &path)?;
    }

    match rx.try_recv() {
        Ok(response) => println!("{}", serde_json::to_string(&response)?),
        Err(_) => log::warn!("Event script ended without confirm or cancel"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("regionsnap").chain(list.iter().copied()))
    }

    #[test]
    fn test_positional_args() {
        let parsed = args(&["data.json", "events.json"]).unwrap();
        assert_eq!(parsed.capture_data, PathBuf::from("data.json"));
        assert_eq!(parsed.events, PathBuf::from("events.json"));
        assert_eq!(parsed.render_path(), None);
        assert!(!parsed.save_config);
    }

    #[test]
    fn test_render_with_path_in_any_position() {
        for list in [
            ["data.json", "events.json", "--render", "out.png"],
            ["data.json", "--render", "out.png", "events.json"],
            ["--render", "out.png", "data.json", "events.json"],
        ] {
            let parsed = args(&list).unwrap();
            assert_eq!(parsed.capture_data, PathBuf::from("data.json"), "{list:?}");
            assert_eq!(parsed.events, PathBuf::from("events.json"), "{list:?}");
            assert_eq!(parsed.render_path(), Some(PathBuf::from("out.png")), "{list:?}");
        }
    }

    #[test]
    fn test_render_without_path_uses_timestamp() {
        let parsed = args(&["data.json", "events.json", "--render"]).unwrap();
        let path = parsed.render_path().unwrap();
        assert!(path.to_string_lossy().starts_with("regionsnap_"));
    }

    #[test]
    fn test_save_config_flag() {
        let parsed = args(&["--save-config", "data.json", "events.json"]).unwrap();
        assert!(parsed.save_config);
    }

    #[test]
    fn test_bad_args_are_rejected() {
        assert!(args(&["data.json"]).is_err());
        assert!(args(&["a", "b", "c"]).is_err());
        assert!(args(&["a", "b", "--verbose"]).is_err());
    }
}
