use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// One dmidecode query category, mapped to its `-t` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bios,
    System,
    Baseboard,
    Chassis,
    Processor,
    Memory,
    Cache,
    Connector,
    Slot,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Bios,
        Category::System,
        Category::Baseboard,
        Category::Chassis,
        Category::Processor,
        Category::Memory,
        Category::Cache,
        Category::Connector,
        Category::Slot,
    ];

    pub fn arg(self) -> &'static str {
        match self {
            Category::Bios => "bios",
            Category::System => "system",
            Category::Baseboard => "baseboard",
            Category::Chassis => "chassis",
            Category::Processor => "processor",
            Category::Memory => "memory",
            Category::Cache => "cache",
            Category::Connector => "connector",
            Category::Slot => "slot",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arg())
    }
}

/// Failures obtaining a report. The parser itself never fails; every variant
/// here means "could not obtain a report", which callers must keep distinct
/// from "obtained a report with no recognizable fields".
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("dmidecode not found on PATH")]
    NotInstalled,
    #[error("dmidecode needs root privileges; re-run as root or set SUDO_PASSWORD")]
    NotPermitted,
    #[error("failed to run dmidecode: {0}")]
    Launch(#[from] std::io::Error),
    #[error("dmidecode -t {category} exited with {status}: {stderr}")]
    Failed {
        category: Category,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("dmidecode -t {category} timed out after {}s", QUERY_TIMEOUT.as_secs())]
    TimedOut { category: Category },
}

/// How a non-root invocation gets elevated.
enum SudoMode {
    /// `sudo -S` with the password piped over stdin. The password never
    /// appears in an argv.
    Password(String),
    /// `sudo -n`: cached credentials or a NOPASSWD rule, or nothing.
    NonInteractive,
}

/// Locates dmidecode once and serves any number of queries. Holds no mutable
/// state, so concurrent queries need no coordination.
pub struct Runner {
    path: PathBuf,
    sudo: Option<SudoMode>,
}

impl Runner {
    /// Resolve dmidecode on PATH and pick the elevation mode from the
    /// effective uid and the SUDO_PASSWORD environment variable.
    pub fn locate() -> Result<Self, RunnerError> {
        let path = which::which("dmidecode").map_err(|_| RunnerError::NotInstalled)?;
        let sudo = if unsafe { libc::geteuid() } == 0 {
            None
        } else {
            match std::env::var("SUDO_PASSWORD") {
                Ok(password) if !password.is_empty() => Some(SudoMode::Password(password)),
                _ => Some(SudoMode::NonInteractive),
            }
        };
        info!("dmidecode at {} ({})", path.display(), elevation_label(&sudo));
        Ok(Self { path, sudo })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn elevation(&self) -> &'static str {
        elevation_label(&self.sudo)
    }

    /// Run `dmidecode -t <category>` and capture its standard output.
    ///
    /// An empty capture is a success: downstream it parses to default
    /// records, the utility's way of saying "nothing to report".
    pub async fn query(&self, category: Category) -> Result<String, RunnerError> {
        let mut cmd = match &self.sudo {
            None => Command::new(&self.path),
            Some(mode) => {
                let mut sudo = Command::new("sudo");
                match mode {
                    SudoMode::Password(_) => {
                        // Empty -p keeps the password prompt out of stderr.
                        sudo.arg("-S").arg("-p").arg("").stdin(Stdio::piped());
                    }
                    SudoMode::NonInteractive => {
                        sudo.arg("-n");
                    }
                }
                sudo.arg(&self.path);
                sudo
            }
        };
        cmd.arg("-t")
            .arg(category.arg())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        debug!("querying dmidecode -t {}", category);

        let mut child = cmd.spawn()?;
        if let Some(SudoMode::Password(password)) = &self.sudo {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(password.as_bytes()).await?;
                stdin.write_all(b"\n").await?;
            }
        }

        let output = tokio::time::timeout(QUERY_TIMEOUT, child.wait_with_output())
            .await
            .map_err(|_| RunnerError::TimedOut { category })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.contains("Permission denied")
                || stderr.contains("a password is required")
                || stderr.contains("incorrect password")
            {
                warn!("insufficient privilege for dmidecode -t {}", category);
                return Err(RunnerError::NotPermitted);
            }
            return Err(RunnerError::Failed {
                category,
                status: output.status,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn elevation_label(sudo: &Option<SudoMode>) -> &'static str {
    match sudo {
        None => "running as root",
        Some(SudoMode::Password(_)) => "elevating via sudo -S",
        Some(SudoMode::NonInteractive) => "elevating via sudo -n",
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_args_match_dmidecode_keywords() {
        let args: Vec<&str> = Category::ALL.iter().map(|c| c.arg()).collect();
        assert_eq!(
            args,
            vec!["bios", "system", "baseboard", "chassis", "processor", "memory", "cache", "connector", "slot"]
        );
    }

    #[test]
    fn not_installed_message_names_the_tool() {
        assert!(RunnerError::NotInstalled.to_string().contains("dmidecode"));
    }
}
