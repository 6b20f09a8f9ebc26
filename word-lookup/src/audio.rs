use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tokio::task::JoinHandle;

/// Plays pronunciation recordings.
///
/// Playback is fire-and-forget: implementations report failures themselves
/// and never hand them back to the caller.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, url: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("could not start {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program:?} exited with {status}")]
    Exit { program: String, status: ExitStatus },
}

/// Hands the url to an external player program, e.g. `mpv`.
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Plays `url` to completion.
    pub async fn run(&self, url: &str) -> Result<(), AudioError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|source| AudioError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(AudioError::Exit {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }

    /// Starts playing `url` in the background, logging the outcome.
    pub fn spawn(&self, url: &str) -> JoinHandle<Result<(), AudioError>> {
        let player = self.clone();
        let url = url.to_owned();
        tokio::spawn(async move {
            let result = player.run(&url).await;
            match &result {
                Ok(()) => tracing::debug!(%url, "finished playing audio"),
                Err(error) => tracing::warn!(%url, "error playing audio: {error}"),
            }
            result
        })
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&self, url: &str) {
        drop(self.spawn(url));
    }
}
