use crate::{
    config::Config,
    error::{Error, Result},
    render::Renderer,
    settings::Settings,
    splitter::{SplitReport, Splitter},
};
use serde::Serialize;
use std::fs;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Statistics collected during a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Raw piece count from splitting, including empty pieces
    pub total_pieces: usize,

    /// Chunks actually rendered
    pub rendered: usize,

    /// Pieces skipped because they were empty after trimming
    pub skipped_empty: usize,

    /// Total execution time
    pub duration: Duration,

    /// Output directory path
    pub output_directory: String,
}

impl RunStats {
    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\nRendered {} of {} pieces ({} empty, skipped) in {:.2}s",
            self.rendered,
            self.total_pieces,
            self.skipped_empty,
            self.duration.as_secs_f64()
        );
        println!("Images saved to {}\n", self.output_directory);
    }
}

/// Summary document written to the output directory after a full run.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    rendered: usize,
    total_pieces: usize,
    skipped_empty: usize,
    duration_secs: f64,
    output_directory: &'a str,
    images: &'a [String],
    generated_at: String,
}

/// Orchestrates one batch run: startup cleanup, settings merge, splitting,
/// and the sequential render loop.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Executes the complete run and returns statistics.
    ///
    /// # Process
    ///
    /// 1. **Prepare**: removes the renderer's stale home config and
    ///    recreates the output directory from scratch
    /// 2. **Settings**: loads defaults, merges the user file into `custom`,
    ///    serializes the transport string once
    /// 3. **Split**: breaks the phrases file on the literal delimiter
    /// 4. **Render**: invokes the renderer per chunk, aborting on the first
    ///    non-zero exit; images rendered before the failure are retained
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails; nothing is retried.
    #[instrument(skip(self), fields(phrases = %self.config.phrases_file.display()))]
    pub fn run(self) -> Result<RunStats> {
        let start = Instant::now();

        self.prepare()?;

        let settings = Settings::load(
            &self.config.default_settings_file,
            &self.config.user_settings_file,
        )?;
        let settings_string = settings.to_arg_string()?;

        let report = self.split()?;
        if report.chunks.is_empty() {
            warn!(
                "No non-empty chunks in {}",
                self.config.phrases_file.display()
            );
        }

        let renderer = Renderer::new(&self.config, settings_string);
        let mut images = Vec::with_capacity(report.chunks.len());

        for chunk in &report.chunks {
            info!(
                "Processing chunk: {} / {}",
                chunk.sequence, report.total_pieces
            );
            images.push(renderer.render(chunk)?);
        }

        let stats = RunStats {
            total_pieces: report.total_pieces,
            rendered: images.len(),
            skipped_empty: report.skipped(),
            duration: start.elapsed(),
            output_directory: self.config.output_dir.display().to_string(),
        };

        if self.config.write_summary && !self.config.dry_run {
            self.write_summary(&stats, &images)?;
        }

        info!(
            "Rendered {} chunks in {:.2}s",
            stats.rendered,
            stats.duration.as_secs_f64()
        );

        Ok(stats)
    }

    /// Startup cleanup: stale renderer config and output directory.
    ///
    /// Skipped entirely in dry run mode so a dry run touches nothing.
    fn prepare(&self) -> Result<()> {
        if self.config.dry_run {
            return Ok(());
        }

        if let Some(ref renderer_config) = self.config.renderer_config_file {
            if renderer_config.exists() {
                fs::remove_file(renderer_config)
                    .map_err(|e| Error::io(renderer_config, e))?;
                info!(
                    "Removed stale renderer config {}",
                    renderer_config.display()
                );
            }
        }

        let out = &self.config.output_dir;
        if out.exists() {
            fs::remove_dir_all(out).map_err(|e| Error::io(out, e))?;
        }
        fs::create_dir_all(out).map_err(|e| Error::io(out, e))?;

        Ok(())
    }

    /// Reads the phrases file and splits it into chunks.
    fn split(&self) -> Result<SplitReport> {
        let raw = fs::read_to_string(&self.config.phrases_file)
            .map_err(|e| Error::io(&self.config.phrases_file, e))?;

        Ok(Splitter::new(&self.config.delimiter).split(&raw))
    }

    /// Writes summary.json into the output directory.
    fn write_summary(&self, stats: &RunStats, images: &[String]) -> Result<()> {
        let summary = RunSummary {
            rendered: stats.rendered,
            total_pieces: stats.total_pieces,
            skipped_empty: stats.skipped_empty,
            duration_secs: stats.duration.as_secs_f64(),
            output_directory: &stats.output_directory,
            images,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let path = self.config.output_dir.join("summary.json");
        let file = fs::File::create(&path).map_err(|e| Error::io(&path, e))?;
        serde_json::to_writer_pretty(file, &summary).map_err(Error::from)?;

        info!("Wrote summary to {}", path.display());
        Ok(())
    }
}
