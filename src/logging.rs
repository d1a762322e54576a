use log::LevelFilter;
use tauri::plugin::TauriPlugin;
use tauri::Runtime;
use tauri_plugin_log::{Target, TargetKind};

/// Overrides the default `info` level, e.g. `MDREADER_LOG=debug`.
pub const LOG_ENV: &str = "MDREADER_LOG";

pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Stdout plus a rolling file in the platform log directory.
pub fn plugin<R: Runtime>() -> TauriPlugin<R> {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());
    tauri_plugin_log::Builder::new()
        .clear_targets()
        .targets([
            Target::new(TargetKind::Stdout),
            Target::new(TargetKind::LogDir { file_name: None }),
        ])
        .level(level)
        .build()
}
