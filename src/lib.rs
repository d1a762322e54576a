// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
use std::sync::Arc;
use tauri::{AppHandle, Manager, RunEvent, Runtime, State, WebviewUrl, WebviewWindowBuilder};
use tauri_plugin_dialog::DialogExt;

pub mod documents;
pub mod error;
pub mod extractor;
pub mod instance;
pub mod logging;
pub mod notify;
pub mod pending;
pub mod reactivate;
pub mod scheduler;
pub mod settings;
pub mod shell_integration;
pub mod types;
mod webview;

#[cfg(test)]
mod test_support;

pub use error::Error;
pub use instance::{LaunchCoordinator, LaunchOutcome, LaunchTimings, UiContext, MAIN_WINDOW};

use scheduler::TokioScheduler;
use settings::SettingsStore;
use types::UserSettings;

const APP_TITLE: &str = "MdReader";

/// Frontend pull: every document queued since the last call, in launch order.
#[tauri::command]
fn drain_pending_files(coordinator: State<'_, LaunchCoordinator>) -> Vec<String> {
    let files = coordinator.drain_pending();
    if !files.is_empty() {
        log::info!("UI claimed {} pending file(s)", files.len());
    }
    files
}

#[tauri::command]
fn get_settings(store: State<'_, SettingsStore>) -> UserSettings {
    store.load()
}

#[tauri::command]
fn save_settings(
    settings: UserSettings,
    store: State<'_, SettingsStore>,
) -> Result<UserSettings, String> {
    store.save(settings).map_err(|e| e.to_string())
}

#[tauri::command]
fn read_file(path: String) -> Result<String, String> {
    documents::read_document(&path).map_err(|e| e.to_string())
}

#[tauri::command]
fn save_file(path: String, content: String) -> Result<(), String> {
    documents::write_document(&path, &content).map_err(|e| e.to_string())
}

/// This process's own argv. Documents in it are already queued at startup.
#[tauri::command]
fn get_command_line_args() -> Vec<String> {
    std::env::args().collect()
}

#[tauri::command]
async fn open_file_dialog(app: AppHandle) -> Option<Vec<String>> {
    let (name, extensions) = documents::OPEN_FILTER;
    app.dialog()
        .file()
        .set_title("Open Markdown Files")
        .add_filter(name, extensions)
        .blocking_pick_files()
        .map(|files| files.iter().map(ToString::to_string).collect())
}

#[tauri::command]
async fn save_file_dialog(app: AppHandle) -> Option<String> {
    let (name, extensions) = documents::SAVE_FILTER;
    app.dialog()
        .file()
        .set_title("Save File")
        .set_file_name(documents::DEFAULT_SAVE_NAME)
        .add_filter(name, extensions)
        .blocking_save_file()
        .map(|path| path.to_string())
}

#[tauri::command]
async fn register_context_menu() -> Result<(), String> {
    shell_integration::register_context_menu().map_err(|e| e.to_string())
}

#[tauri::command]
async fn unregister_context_menu() -> Result<(), String> {
    shell_integration::unregister_context_menu().map_err(|e| e.to_string())
}

/// Everything that must be in place before the main window exists: settings
/// are loaded and managed (IPC can reach them as soon as the webview loads)
/// and this process's own documents are queued for the UI's startup drain.
fn prepare_startup<R: Runtime>(app: &AppHandle<R>, argv: &[String]) -> UserSettings {
    let store = SettingsStore::for_app(app);
    let settings = store.load();
    log::info!("Loaded settings from {:?}: {:?}", store.path(), settings);
    app.manage(store);

    if let Some(coordinator) = app.try_state::<LaunchCoordinator>() {
        coordinator.queue_own_launch(argv);
    }
    settings
}

/// Finder delivers documents as an `Opened` event rather than argv; they go
/// through the same queue as relayed launches.
fn on_run_event(app: &AppHandle, event: RunEvent) {
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    if let RunEvent::Opened { urls } = event {
        let paths: Vec<String> = urls
            .iter()
            .filter_map(|url| url.to_file_path().ok())
            .map(|path| path.to_string_lossy().into_owned())
            .collect();
        if let Some(coordinator) = app.try_state::<LaunchCoordinator>() {
            let window = app.get_webview_window(MAIN_WINDOW);
            coordinator.handle_second_launch(window.as_ref(), &paths);
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "ios")))]
    let _ = (app, event);
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let coordinator = LaunchCoordinator::new(
        Arc::new(TokioScheduler::tauri()),
        LaunchTimings::default(),
    );

    tauri::Builder::default()
        // Must be registered first so a second launch exits before doing any work.
        .plugin(instance::plugin())
        .plugin(logging::plugin())
        .plugin(tauri_plugin_dialog::init())
        .manage(coordinator)
        .setup(|app| {
            // Settings come first: the window is created with the saved geometry.
            let argv: Vec<String> = std::env::args().collect();
            let settings = prepare_startup(app.handle(), &argv);

            let window = WebviewWindowBuilder::new(app.handle(), MAIN_WINDOW, WebviewUrl::default())
                .title(APP_TITLE)
                .inner_size(settings.window.width as f64, settings.window.height as f64)
                .build()?;

            if settings.window.maximized {
                let coordinator = app.state::<LaunchCoordinator>();
                reactivate::maximize_after(
                    &window,
                    coordinator.scheduler(),
                    coordinator.timings().startup_maximize_delay,
                );
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            drain_pending_files,
            get_settings,
            save_settings,
            read_file,
            save_file,
            get_command_line_args,
            open_file_dialog,
            save_file_dialog,
            register_context_menu,
            unregister_context_menu
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(on_run_event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::manual::ManualScheduler;
    use tauri::test::{mock_builder, mock_context, noop_assets};

    fn mock_app() -> tauri::App<tauri::test::MockRuntime> {
        let coordinator = LaunchCoordinator::new(
            Arc::new(ManualScheduler::new()),
            LaunchTimings::default(),
        );
        mock_builder()
            .manage(coordinator)
            .build(mock_context(noop_assets()))
            .unwrap()
    }

    #[test]
    fn startup_manages_settings_before_any_window() {
        let app = mock_app();
        assert!(app.try_state::<SettingsStore>().is_none());

        let settings = prepare_startup(app.handle(), &["mdreader".to_string()]);

        assert!(app.get_webview_window(MAIN_WINDOW).is_none());
        assert!(app.try_state::<SettingsStore>().is_some());
        assert_eq!(settings.clone().sanitized(), settings);
    }

    #[test]
    fn first_launch_document_reaches_the_first_drain() {
        let app = mock_app();
        let argv = vec!["mdreader".to_string(), "\"C:\\docs\\a.md\"".to_string()];

        prepare_startup(app.handle(), &argv);

        let coordinator = app.state::<LaunchCoordinator>();
        assert_eq!(coordinator.drain_pending(), vec!["C:\\docs\\a.md"]);
        assert!(coordinator.drain_pending().is_empty());
    }
}
