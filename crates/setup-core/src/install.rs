//! Dependency installation via npm
//!
//! Runs `npm install` in the project root, streaming its output. Failure
//! here is never fatal to setup: the caller downgrades it to a "run npm
//! install manually" notice.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for the whole install (10 minutes; registry fetches can be slow)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// The command shown to the user for manual recovery
pub const INSTALL_COMMAND: &str = "npm install";

/// Install the manifest's dependencies, streaming output as it arrives.
pub async fn install_dependencies(root: &Path) -> Result<()> {
    println!();
    println!("{} {}", "Running:".dimmed(), INSTALL_COMMAND.yellow());
    println!();

    let mut child = TokioCommand::new("npm")
        .arg("install")
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let output_task = async {
        loop {
            tokio::select! {
                line = stdout_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => break,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            break;
                        }
                    }
                }
                line = stderr_reader.next_line() => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => {}
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                        }
                    }
                }
            }
        }
    };

    match timeout(INSTALL_TIMEOUT, output_task).await {
        Ok(_) => {}
        Err(_) => {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "Installation timed out after {} seconds.\n\
                 The registry may be unreachable. Please try again later or run manually:\n\
                 {}",
                INSTALL_TIMEOUT.as_secs(),
                INSTALL_COMMAND
            );
        }
    }

    match timeout(Duration::from_secs(5), child.wait()).await {
        Ok(Ok(status)) => {
            println!();
            if status.success() {
                Ok(())
            } else {
                anyhow::bail!(
                    "Installation failed with exit code: {}\n\
                     Please try running manually: {}",
                    status.code().unwrap_or(-1),
                    INSTALL_COMMAND
                );
            }
        }
        Ok(Err(e)) => {
            anyhow::bail!("Failed to wait for npm: {}", e);
        }
        Err(_) => {
            let _ = child.kill().await;
            anyhow::bail!(
                "npm install hung after its output ended. Please run manually:\n{}",
                INSTALL_COMMAND
            );
        }
    }
}
