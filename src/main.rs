use anyhow::Context;
use carbon_batch::{Config, Pipeline};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "carbon-batch",
    version,
    author,
    about = "Batch-render delimited text snippets into styled code screenshots",
    long_about = "Splits a phrases file on a literal delimiter and invokes the \
    carbon-now CLI once per snippet, saving one styled image per snippet into \
    a freshly recreated output directory.\n\n\
    USAGE EXAMPLES:\n  \
      # Render phrases.txt with default settings\n  \
      carbon-batch\n\n  \
      # Custom input and output locations\n  \
      carbon-batch --phrases ./snippets.txt --out ./images\n\n  \
      # Preview the invocations without rendering anything\n  \
      carbon-batch --dry-run -v"
)]
struct Cli {
    /// Phrases file with snippets separated by the delimiter
    #[arg(short, long, default_value = "phrases.txt", value_name = "FILE")]
    phrases: PathBuf,

    /// Default settings file (required, JSON)
    #[arg(long, default_value = "default-settings.json", value_name = "FILE")]
    settings: PathBuf,

    /// User settings file merged into the `custom` field, skipped if absent
    #[arg(long, default_value = "settings.json", value_name = "FILE")]
    user_settings: PathBuf,

    /// Output directory for rendered images (recreated on every run)
    #[arg(short, long, default_value = "out", value_name = "PATH")]
    out: PathBuf,

    /// Scratch file holding the current snippet during rendering
    #[arg(long, default_value = "temp.txt", value_name = "FILE")]
    scratch: PathBuf,

    /// External renderer command
    #[arg(long, default_value = "carbon-now", value_name = "CMD")]
    program: String,

    /// Literal delimiter separating snippets
    #[arg(long, default_value = "===DELIMITER===")]
    delimiter: String,

    /// Number of leading words used to derive output filenames
    #[arg(long, default_value_t = 6)]
    word_limit: usize,

    /// Dry run (log invocations without rendering)
    #[arg(long)]
    dry_run: bool,

    /// Keep the scratch file after each invocation
    #[arg(long)]
    keep_scratch: bool,

    /// Skip writing summary.json into the output directory
    #[arg(long)]
    no_summary: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let config = Config::builder()
        .phrases_file(cli.phrases)
        .default_settings_file(cli.settings)
        .user_settings_file(cli.user_settings)
        .output_dir(cli.out)
        .scratch_file(cli.scratch)
        .program(cli.program)
        .delimiter(cli.delimiter)
        .word_limit(cli.word_limit)
        .dry_run(cli.dry_run)
        .keep_scratch(cli.keep_scratch)
        .write_summary(!cli.no_summary)
        .build()
        .context("Failed to build configuration")?;

    let stats = Pipeline::new(config)
        .context("Failed to create pipeline")?
        .run()
        .context("Batch run failed")?;

    stats.print_summary();

    Ok(())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("carbon_batch=info"),
        1 => EnvFilter::new("carbon_batch=debug"),
        _ => EnvFilter::new("carbon_batch=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();

    Ok(())
}
