use crate::error::{Error, Result};
use crate::notify::UiSignal;
use crate::reactivate::WindowControl;
use std::sync::{Arc, Mutex};

/// Records every window and UI call; clones share the same log.
#[derive(Clone, Default)]
pub(crate) struct FakeWindow {
    maximized: bool,
    failing: Vec<&'static str>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeWindow {
    pub(crate) fn new(maximized: bool) -> Self {
        Self {
            maximized,
            ..Default::default()
        }
    }

    pub(crate) fn failing(mut self, ops: &[&'static str]) -> Self {
        self.failing.extend_from_slice(ops);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(&op) {
            Err(Error::window(op, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

impl WindowControl for FakeWindow {
    fn is_maximized(&self) -> Result<bool> {
        self.record("is_maximized", "is_maximized".into())?;
        Ok(self.maximized)
    }

    fn unminimize(&self) -> Result<()> {
        self.record("unminimize", "unminimize".into())
    }

    fn show(&self) -> Result<()> {
        self.record("show", "show".into())
    }

    fn set_always_on_top(&self, on_top: bool) -> Result<()> {
        let op = if on_top { "on_top(true)" } else { "on_top(false)" };
        self.record(op, op.into())
    }

    fn maximize(&self) -> Result<()> {
        self.record("maximize", "maximize".into())
    }
}

impl UiSignal for FakeWindow {
    fn emit_signal(&self, event: &str) -> Result<()> {
        self.record("emit", format!("emit({})", event))
    }

    fn eval_script(&self, script: &str) -> Result<()> {
        self.record("eval", format!("eval({})", script))
    }
}
