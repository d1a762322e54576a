use crate::error::Result;
use crate::scheduler::Scheduler;
use std::time::Duration;

/// The window-manager calls reactivation needs.
pub trait WindowControl: Send + Sync {
    fn is_maximized(&self) -> Result<bool>;
    fn unminimize(&self) -> Result<()>;
    fn show(&self) -> Result<()>;
    fn set_always_on_top(&self, on_top: bool) -> Result<()>;
    fn maximize(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reactivation {
    pub was_maximized: bool,
    pub remaximize_scheduled: bool,
}

fn best_effort(op: &str, result: Result<()>) {
    if let Err(e) = result {
        log::warn!("Reactivate: {} failed: {}", op, e);
    }
}

/// Bring an existing window back to the front without losing its maximized state.
///
/// Pulsing always-on-top is what actually raises the window above others on
/// some window managers, but it can also drop a maximized window back to its
/// restored bounds. The maximize is therefore re-applied once the geometry
/// transition has settled.
pub fn reactivate<W>(window: &W, scheduler: &dyn Scheduler, remaximize_after: Duration) -> Reactivation
where
    W: WindowControl + Clone + 'static,
{
    let was_maximized = window.is_maximized().unwrap_or_else(|e| {
        log::warn!("Reactivate: is_maximized failed: {}", e);
        false
    });

    best_effort("unminimize", window.unminimize());
    best_effort("show", window.show());
    best_effort("set_always_on_top(true)", window.set_always_on_top(true));
    best_effort("set_always_on_top(false)", window.set_always_on_top(false));

    if was_maximized {
        let window = window.clone();
        scheduler.schedule(
            remaximize_after,
            Box::new(move || best_effort("maximize", window.maximize())),
        );
    }

    Reactivation {
        was_maximized,
        remaximize_scheduled: was_maximized,
    }
}

/// Maximize a freshly created window once it has had time to initialize.
pub fn maximize_after<W>(window: &W, scheduler: &dyn Scheduler, delay: Duration)
where
    W: WindowControl + Clone + 'static,
{
    let window = window.clone();
    scheduler.schedule(delay, Box::new(move || best_effort("maximize", window.maximize())));
}
