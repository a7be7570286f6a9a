//! Headless shell.
//!
//! Line-oriented driver for a [`Toolverse`]: each input line is a hash
//! change, and the main content is written back after every navigation.
//! Lines starting with `:` are commands:
//!
//! - `:favorite <id>` - toggle a favorite
//! - `:theme` - toggle the theme
//! - `:status` - print a JSON status line
//! - `:quit` - stop reading

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use super::app::Toolverse;
use super::error::Result;

/// Shell over the process's stdin/stdout.
pub struct Shell;

impl Shell {
    /// Run until stdin closes or `:quit` is read.
    pub async fn run(app: &Toolverse) -> Result<()> {
        info!("Ready - reading hash fragments from stdin");
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        Self::run_with(app, stdin, stdout).await?;
        info!("Shell finished");
        Ok(())
    }

    /// Run against arbitrary streams.
    pub async fn run_with<R, W>(app: &Toolverse, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line == ":quit" {
                break;
            }

            let reply = match line.strip_prefix(':') {
                Some(command) => Self::command(app, command).await,
                None => {
                    let outcome = app.navigate(line).await;
                    info!("Navigation to {:?}: {:?}", line, outcome);
                    app.app_content().await
                }
            };

            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
        Ok(())
    }

    async fn command(app: &Toolverse, command: &str) -> String {
        let (name, arg) = match command.split_once(' ') {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "favorite" if !arg.is_empty() => match app.toggle_favorite(arg).await {
                Ok(icon) => icon.class(),
                Err(e) => {
                    warn!("Could not toggle favorite {}: {}", arg, e);
                    format!("error: {}", e)
                }
            },
            "theme" => match app.toggle_theme().await {
                Ok(theme) => theme.as_str().to_string(),
                Err(e) => {
                    warn!("Could not toggle theme: {}", e);
                    format!("error: {}", e)
                }
            },
            "status" => serde_json::json!({
                "site": app.config().site.name,
                "version": app.config().site.version,
                "tools": app.registry().len(),
                "active_module": app.router().active_module_id().await,
                "phase": format!("{:?}", app.router().phase().await),
                "theme": app.theme().as_str(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })
            .to_string(),
            _ => format!("error: unknown command :{}", command),
        }
    }
}
