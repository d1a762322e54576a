//! Second-launch handling: the surviving instance receives each new launch's
//! argv, queues its documents and wakes the UI.

use crate::extractor::extract_document_paths;
use crate::notify::{dispatch_new_files, UiSignal};
use crate::pending::PendingFileQueue;
use crate::reactivate::{reactivate, Reactivation, WindowControl};
use crate::scheduler::Scheduler;
use std::sync::Arc;
use std::time::Duration;
use tauri::plugin::TauriPlugin;
use tauri::{Manager, Runtime};

/// Label of the one document window.
pub const MAIN_WINDOW: &str = "main";

/// Everything the coordinator needs from the live UI.
pub trait UiContext: WindowControl + UiSignal + Clone + 'static {}

impl<T> UiContext for T where T: WindowControl + UiSignal + Clone + 'static {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchTimings {
    /// Wait before re-applying maximize after the always-on-top pulse.
    pub remaximize_delay: Duration,
    /// Wait before signalling the UI; must outlast `remaximize_delay`.
    pub notify_delay: Duration,
    /// Wait before maximizing the main window at startup.
    pub startup_maximize_delay: Duration,
}

impl Default for LaunchTimings {
    fn default() -> Self {
        Self {
            remaximize_delay: Duration::from_millis(50),
            notify_delay: Duration::from_millis(200),
            startup_maximize_delay: Duration::from_millis(60),
        }
    }
}

impl LaunchTimings {
    pub fn is_consistent(&self) -> bool {
        self.notify_delay > self.remaximize_delay
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub accepted: Vec<String>,
    /// `None` when there was no window to reactivate.
    pub reactivation: Option<Reactivation>,
    pub notification_scheduled: bool,
}

/// Owns the pending queue and the scheduler used for settle delays.
pub struct LaunchCoordinator {
    queue: PendingFileQueue,
    scheduler: Arc<dyn Scheduler>,
    timings: LaunchTimings,
}

impl LaunchCoordinator {
    pub fn new(scheduler: Arc<dyn Scheduler>, timings: LaunchTimings) -> Self {
        if !timings.is_consistent() {
            log::warn!(
                "Launch: notify delay {:?} does not outlast re-maximize delay {:?}",
                timings.notify_delay,
                timings.remaximize_delay
            );
        }
        Self {
            queue: PendingFileQueue::new(),
            scheduler,
            timings,
        }
    }

    pub fn timings(&self) -> LaunchTimings {
        self.timings
    }

    pub fn scheduler(&self) -> &dyn Scheduler {
        self.scheduler.as_ref()
    }

    pub fn queue(&self) -> &PendingFileQueue {
        &self.queue
    }

    /// Hand every queued path to the caller exactly once.
    pub fn drain_pending(&self) -> Vec<String> {
        self.queue.drain_and_clear()
    }

    /// Queue documents passed to this (first) process. The UI is not running
    /// yet, so it claims them with its startup drain.
    pub fn queue_own_launch<S: AsRef<str>>(&self, argv: &[S]) -> Vec<String> {
        let accepted = extract_document_paths(argv);
        for path in &accepted {
            self.queue.enqueue(path.as_str());
        }
        if !accepted.is_empty() {
            log::info!("Launch: {} document(s) from the initial command line", accepted.len());
        }
        accepted
    }

    /// Process one relayed launch.
    ///
    /// Paths are queued first and unconditionally, so a launch that races
    /// startup (`ctx` is `None`) loses nothing: the UI picks the files up when
    /// it drains the queue on its own startup.
    pub fn handle_second_launch<C, S>(&self, ctx: Option<&C>, argv: &[S]) -> LaunchOutcome
    where
        C: UiContext,
        S: AsRef<str>,
    {
        let accepted = extract_document_paths(argv);
        for path in &accepted {
            self.queue.enqueue(path.as_str());
        }
        log::info!(
            "Launch: {} of {} argument(s) queued as documents",
            accepted.len(),
            argv.len()
        );

        let Some(ctx) = ctx else {
            log::info!("Launch: UI not ready, skipping reactivation");
            return LaunchOutcome {
                accepted,
                reactivation: None,
                notification_scheduled: false,
            };
        };

        let reactivation = reactivate(ctx, self.scheduler(), self.timings.remaximize_delay);

        let notification_scheduled = !accepted.is_empty();
        if notification_scheduled {
            dispatch_new_files(ctx, self.scheduler(), self.timings.notify_delay);
        }

        LaunchOutcome {
            accepted,
            reactivation: Some(reactivation),
            notification_scheduled,
        }
    }
}

/// Single-instance gate. A later launch with the same app identifier exits
/// after its argv is relayed here.
pub fn plugin<R: Runtime>() -> TauriPlugin<R> {
    tauri_plugin_single_instance::init(|app, argv, cwd| {
        log::info!("Launch: second instance from {:?} with {:?}", cwd, argv);

        let Some(coordinator) = app.try_state::<LaunchCoordinator>() else {
            log::warn!("Launch: coordinator not registered, dropping {:?}", argv);
            return;
        };
        let window = app.get_webview_window(MAIN_WINDOW);
        coordinator.handle_second_launch(window.as_ref(), &argv);
    })
}
