use crate::config::Config;
use crate::error::{Error, Result};
use crate::filename::stem_from_chunk;
use crate::splitter::Chunk;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, error, info};

/// Platform launch mechanism for the external renderer.
///
/// Selected once at startup; the rest of the code is platform-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    /// Invoke the renderer binary directly (Unix-likes)
    Direct,

    /// Route the invocation through `cmd /c` (Windows)
    CommandInterpreter,
}

impl Launcher {
    /// Picks the launcher for the current platform.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(windows) {
            Self::CommandInterpreter
        } else {
            Self::Direct
        }
    }

    /// Builds the base command for the given renderer program.
    fn command(self, program: &str) -> Command {
        match self {
            Self::Direct => Command::new(program),
            Self::CommandInterpreter => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/c").arg(program);
                cmd
            }
        }
    }
}

/// Invokes the external renderer once per chunk.
///
/// Each invocation writes the chunk text to the shared scratch file, runs
/// the renderer with inherited standard streams, and deletes the scratch
/// file on success. A non-zero exit status aborts the whole run.
pub struct Renderer {
    program: String,
    launcher: Launcher,
    output_dir: PathBuf,
    scratch_file: PathBuf,
    settings: String,
    word_limit: usize,
    keep_scratch: bool,
    dry_run: bool,
}

impl Renderer {
    /// Creates a renderer from configuration and the serialized settings string.
    #[must_use]
    pub fn new(config: &Config, settings: String) -> Self {
        Self::with_launcher(config, settings, Launcher::detect())
    }

    /// Creates a renderer with an explicit launcher.
    #[must_use]
    pub fn with_launcher(config: &Config, settings: String, launcher: Launcher) -> Self {
        Self {
            program: config.program.clone(),
            launcher,
            output_dir: config.output_dir.clone(),
            scratch_file: config.scratch_file.clone(),
            settings,
            word_limit: config.word_limit,
            keep_scratch: config.keep_scratch,
            dry_run: config.dry_run,
        }
    }

    /// Renders one chunk and returns the output base name passed to the renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the scratch file cannot be written, the renderer
    /// cannot be spawned, or the renderer exits with a non-zero status.
    pub fn render(&self, chunk: &Chunk) -> Result<String> {
        let save_as = format!(
            "{}_{}",
            stem_from_chunk(&chunk.text, self.word_limit),
            chunk.sequence
        );

        if self.dry_run {
            info!("[dry run] would render '{}' via {}", save_as, self.program);
            return Ok(save_as);
        }

        fs::write(&self.scratch_file, &chunk.text)
            .map_err(|e| Error::io(&self.scratch_file, e))?;

        debug!(
            "Invoking {} for '{}' -> {}",
            self.program,
            save_as,
            self.output_dir.display()
        );

        let status = self
            .launcher
            .command(&self.program)
            .arg(&self.scratch_file)
            .arg("--save-to")
            .arg(&self.output_dir)
            .arg("--save-as")
            .arg(&save_as)
            .arg("--settings")
            .arg(&self.settings)
            .status()
            .map_err(|e| Error::io(&self.program, e))?;

        if !status.success() {
            error!("Renderer '{}' reported {}", self.program, status);
            return Err(Error::render(&self.program, status));
        }

        if !self.keep_scratch && self.scratch_file.exists() {
            fs::remove_file(&self.scratch_file)
                .map_err(|e| Error::io(&self.scratch_file, e))?;
        }

        Ok(save_as)
    }
}
