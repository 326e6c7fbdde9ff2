use crate::error::{Error, Result};
use std::path::PathBuf;

const DEFAULT_PROGRAM: &str = "carbon-now";
const DEFAULT_DELIMITER: &str = "===DELIMITER===";
const DEFAULT_WORD_LIMIT: usize = 6;
const RENDERER_HOME_CONFIG: &str = ".carbon-now.json";

/// Configuration for the carbon-batch pipeline.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Input file containing delimiter-separated snippets
    pub phrases_file: PathBuf,

    /// Required default settings file (JSON)
    pub default_settings_file: PathBuf,

    /// User settings file merged into the `custom` field; skipped if absent
    pub user_settings_file: PathBuf,

    /// Output directory, recreated from scratch on every run
    pub output_dir: PathBuf,

    /// Scratch file holding the current chunk while the renderer runs
    pub scratch_file: PathBuf,

    /// External renderer command
    pub program: String,

    /// Stale renderer config deleted at startup so it cannot override the
    /// settings string; `None` disables the cleanup
    pub renderer_config_file: Option<PathBuf>,

    /// Literal delimiter separating snippets in the phrases file
    pub delimiter: String,

    /// Number of leading words used to derive output filenames
    pub word_limit: usize,

    /// Dry run mode (no renderer invocations, no filesystem changes)
    pub dry_run: bool,

    /// Keep the scratch file after each invocation instead of deleting it
    pub keep_scratch: bool,

    /// Write a summary.json into the output directory after a full run
    pub write_summary: bool,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use carbon_batch::Config;
    ///
    /// let builder = Config::builder()
    ///     .phrases_file("phrases.txt")
    ///     .output_dir("out");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The phrases file or default settings file is missing
    /// - The delimiter or renderer command is empty
    /// - The word limit is zero
    pub fn validate(&self) -> Result<()> {
        if !self.phrases_file.is_file() {
            return Err(Error::config(format!(
                "Phrases file does not exist: {}",
                self.phrases_file.display()
            )));
        }

        if !self.default_settings_file.is_file() {
            return Err(Error::config(format!(
                "Default settings file does not exist: {}",
                self.default_settings_file.display()
            )));
        }

        if self.delimiter.is_empty() {
            return Err(Error::config("delimiter must not be empty"));
        }

        if self.program.is_empty() {
            return Err(Error::config("renderer command must not be empty"));
        }

        if self.word_limit == 0 {
            return Err(Error::config("word_limit must be greater than 0"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phrases_file: PathBuf::from("phrases.txt"),
            default_settings_file: PathBuf::from("default-settings.json"),
            user_settings_file: PathBuf::from("settings.json"),
            output_dir: PathBuf::from("out"),
            scratch_file: PathBuf::from("temp.txt"),
            program: DEFAULT_PROGRAM.to_string(),
            renderer_config_file: dirs::home_dir().map(|home| home.join(RENDERER_HOME_CONFIG)),
            delimiter: DEFAULT_DELIMITER.to_string(),
            word_limit: DEFAULT_WORD_LIMIT,
            dry_run: false,
            keep_scratch: false,
            write_summary: true,
        }
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    phrases_file: Option<PathBuf>,
    default_settings_file: Option<PathBuf>,
    user_settings_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    scratch_file: Option<PathBuf>,
    program: Option<String>,
    renderer_config_file: Option<Option<PathBuf>>,
    delimiter: Option<String>,
    word_limit: Option<usize>,
    dry_run: bool,
    keep_scratch: bool,
    write_summary: Option<bool>,
}

impl ConfigBuilder {
    /// Sets the phrases file to split.
    #[must_use]
    pub fn phrases_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.phrases_file = Some(path.into());
        self
    }

    /// Sets the required default settings file.
    #[must_use]
    pub fn default_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_settings_file = Some(path.into());
        self
    }

    /// Sets the user settings file merged into `custom` when present.
    #[must_use]
    pub fn user_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.user_settings_file = Some(path.into());
        self
    }

    /// Sets the output directory for rendered images.
    #[must_use]
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Sets the scratch file path.
    #[must_use]
    pub fn scratch_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.scratch_file = Some(path.into());
        self
    }

    /// Sets the external renderer command.
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Sets the renderer home-config file removed at startup, or `None` to
    /// disable the cleanup.
    #[must_use]
    pub fn renderer_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.renderer_config_file = Some(path);
        self
    }

    /// Sets the snippet delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Sets the number of leading words used for filename derivation.
    #[must_use]
    pub fn word_limit(mut self, limit: usize) -> Self {
        self.word_limit = Some(limit);
        self
    }

    /// Enables dry run mode (no renderer invocations).
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Keeps the scratch file after each invocation.
    #[must_use]
    pub fn keep_scratch(mut self, enabled: bool) -> Self {
        self.keep_scratch = enabled;
        self
    }

    /// Enables or disables writing summary.json after a full run.
    #[must_use]
    pub fn write_summary(mut self, enabled: bool) -> Self {
        self.write_summary = Some(enabled);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        let config = Config {
            phrases_file: self.phrases_file.unwrap_or(defaults.phrases_file),
            default_settings_file: self
                .default_settings_file
                .unwrap_or(defaults.default_settings_file),
            user_settings_file: self.user_settings_file.unwrap_or(defaults.user_settings_file),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            scratch_file: self.scratch_file.unwrap_or(defaults.scratch_file),
            program: self.program.unwrap_or(defaults.program),
            renderer_config_file: self
                .renderer_config_file
                .unwrap_or(defaults.renderer_config_file),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
            word_limit: self.word_limit.unwrap_or(defaults.word_limit),
            dry_run: self.dry_run,
            keep_scratch: self.keep_scratch,
            write_summary: self.write_summary.unwrap_or(defaults.write_summary),
        };

        config.validate()?;
        Ok(config)
    }
}
