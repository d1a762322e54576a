use crate::error::Result;
use crate::scheduler::Scheduler;
use std::time::Duration;

/// Broadcast whenever new documents are waiting in the pending queue.
pub const NEW_FILES_EVENT: &str = "new-files-available";

/// Calls the frontend's optional global hook; harmless when it is not defined.
pub const CHECK_FILES_SCRIPT: &str =
    "if (typeof window.CheckFiles === 'function') { window.CheckFiles(); }";

/// The two channels that reach the UI layer.
pub trait UiSignal: Send + Sync {
    fn emit_signal(&self, event: &str) -> Result<()>;
    fn eval_script(&self, script: &str) -> Result<()>;
}

/// Wake the UI after `settle` so a suspended webview has resumed.
///
/// The event alone has been seen to go missing while the webview was
/// suspended, so the hook is invoked directly as well. Nothing is retried: the
/// UI also drains the queue on its own startup and focus.
pub fn dispatch_new_files<U>(ui: &U, scheduler: &dyn Scheduler, settle: Duration)
where
    U: UiSignal + Clone + 'static,
{
    let ui = ui.clone();
    scheduler.schedule(
        settle,
        Box::new(move || {
            if let Err(e) = ui.emit_signal(NEW_FILES_EVENT) {
                log::debug!("Notify: emit {} failed: {}", NEW_FILES_EVENT, e);
            }
            if let Err(e) = ui.eval_script(CHECK_FILES_SCRIPT) {
                log::debug!("Notify: CheckFiles hook failed: {}", e);
            }
        }),
    );
}
