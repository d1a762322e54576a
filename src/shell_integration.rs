//! "Open with MdReader" entry in the Explorer context menu.
//!
//! The registered command launches this executable with the selected file as
//! its argument, which is where second-launch argv vectors come from.

use crate::error::{Error, Result};

pub const MENU_KEY: &str = r"HKCR\*\shell\MdReader";
pub const COMMAND_KEY: &str = r"HKCR\*\shell\MdReader\command";
pub const MENU_LABEL: &str = "Open with MdReader";

/// One `reg.exe` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegCommand {
    pub step: &'static str,
    pub args: Vec<String>,
    /// Failure is tolerated for optional steps.
    pub required: bool,
}

fn reg(step: &'static str, required: bool, args: &[&str]) -> RegCommand {
    RegCommand {
        step,
        args: args.iter().map(|a| a.to_string()).collect(),
        required,
    }
}

pub fn registration_commands(exe: &str) -> Vec<RegCommand> {
    let launch = format!("\"{}\" \"%1\"", exe);
    vec![
        reg("menu", true, &["add", MENU_KEY, "/ve", "/d", MENU_LABEL, "/f"]),
        reg("command", true, &["add", COMMAND_KEY, "/ve", "/d", launch.as_str(), "/f"]),
        reg("icon", false, &["add", MENU_KEY, "/v", "Icon", "/d", exe, "/f"]),
    ]
}

pub fn unregistration_commands() -> Vec<RegCommand> {
    vec![reg("delete", true, &["delete", MENU_KEY, "/f"])]
}

#[cfg(target_os = "windows")]
fn run_reg(command: &RegCommand) -> Result<()> {
    use std::process::Command;

    let output = Command::new("reg")
        .args(&command.args)
        .output()
        .map_err(|e| Error::Registry {
            step: command.step,
            message: e.to_string(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(Error::Registry {
            step: command.step,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(target_os = "windows")]
fn run_all(commands: &[RegCommand]) -> Result<()> {
    for command in commands {
        match run_reg(command) {
            Ok(()) => {}
            Err(e) if !command.required => {
                log::warn!("Shell integration: optional step failed: {}", e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(target_os = "windows")]
pub fn register_context_menu() -> Result<()> {
    let exe = std::env::current_exe().map_err(|e| Error::Registry {
        step: "current_exe",
        message: e.to_string(),
    })?;
    run_all(&registration_commands(&exe.to_string_lossy()))?;
    log::info!("Shell integration: context menu registered for {:?}", exe);
    Ok(())
}

#[cfg(target_os = "windows")]
pub fn unregister_context_menu() -> Result<()> {
    run_all(&unregistration_commands())?;
    log::info!("Shell integration: context menu removed");
    Ok(())
}

#[cfg(not(target_os = "windows"))]
pub fn register_context_menu() -> Result<()> {
    Err(Error::Unsupported("context menu registration"))
}

#[cfg(not(target_os = "windows"))]
pub fn unregister_context_menu() -> Result<()> {
    Err(Error::Unsupported("context menu registration"))
}
