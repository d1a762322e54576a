use crate::error::{Error, Result};
use crate::notify::UiSignal;
use crate::reactivate::WindowControl;
use tauri::{Emitter, Runtime, WebviewWindow};

impl<R: Runtime> WindowControl for WebviewWindow<R> {
    fn is_maximized(&self) -> Result<bool> {
        WebviewWindow::is_maximized(self).map_err(|e| Error::window("is_maximized", e))
    }

    fn unminimize(&self) -> Result<()> {
        WebviewWindow::unminimize(self).map_err(|e| Error::window("unminimize", e))
    }

    fn show(&self) -> Result<()> {
        WebviewWindow::show(self).map_err(|e| Error::window("show", e))
    }

    fn set_always_on_top(&self, on_top: bool) -> Result<()> {
        WebviewWindow::set_always_on_top(self, on_top)
            .map_err(|e| Error::window("set_always_on_top", e))
    }

    fn maximize(&self) -> Result<()> {
        WebviewWindow::maximize(self).map_err(|e| Error::window("maximize", e))
    }
}

impl<R: Runtime> UiSignal for WebviewWindow<R> {
    // Emitting from the window still reaches every listener, not just this webview.
    fn emit_signal(&self, event: &str) -> Result<()> {
        Emitter::emit(self, event, ()).map_err(Error::from)
    }

    fn eval_script(&self, script: &str) -> Result<()> {
        self.eval(script).map_err(Error::from)
    }
}
