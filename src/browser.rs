// Browser module for opening mod pages

use anyhow::Context;
use std::process::Command;

/// Opens a URL in the user's browser
pub trait Launcher {
    fn open(&self, url: &str) -> anyhow::Result<()>;
}

/// Hands the URL to the OS's default URL handler without waiting for it
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        browser_command(url)
            .spawn()
            .with_context(|| format!("failed to open a browser for {}", url))?;
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", url]);
    cmd
}

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn browser_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
