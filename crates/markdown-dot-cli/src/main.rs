use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_dot_config::Config;
use markdown_dot_engine::{Converter, HtmlConverter, Pipeline, Shell, io};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "markdown-dot")]
#[command(about = "Converts a folder of Markdown files to HTML")]
struct Args {
    /// Folder of .md files; falls back to `input_dir` from the config file
    input_dir: Option<PathBuf>,

    /// Write output under this folder instead of next to each source
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit bare HTML fragments without the document shell
    #[arg(long)]
    fragment: bool,

    /// Include subfolders
    #[arg(short, long)]
    recursive: bool,

    /// Stylesheet href to link from each document
    #[arg(long)]
    stylesheet: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log tree outlines and pipeline decisions
    #[arg(long)]
    debug: bool,
}

/// Effective settings after merging the config file and flags.
#[derive(Debug, PartialEq)]
struct Settings {
    input_dir: PathBuf,
    output_dir: Option<PathBuf>,
    full_html: bool,
    stylesheet: Option<String>,
    recursive: bool,
}

impl Settings {
    /// Flags win over the config file.
    fn resolve(args: &Args, config: Option<Config>) -> Result<Self> {
        let config = match (&args.input_dir, config) {
            (_, Some(config)) => config,
            (Some(dir), None) => Config::new(dir),
            (None, None) => bail!(
                "No input folder given and no config file found at {}",
                Config::config_path().display()
            ),
        };

        Ok(Self {
            input_dir: args.input_dir.clone().unwrap_or(config.input_dir),
            output_dir: args.output.clone().or(config.output_dir),
            full_html: config.full_html && !args.fragment,
            stylesheet: args.stylesheet.clone().or(config.stylesheet),
            recursive: args.recursive || config.recursive,
        })
    }
}

fn load_config(args: &Args) -> Result<Option<Config>> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?;
    if config.is_none() && args.config.is_some() {
        bail!("Config file '{}' does not exist", config_path.display());
    }
    Ok(config)
}

/// Converts every file and returns how many were written.
fn run(settings: &Settings) -> Result<usize> {
    io::validate_input_dir(&settings.input_dir).with_context(|| {
        format!(
            "Cannot read input folder '{}'",
            settings.input_dir.display()
        )
    })?;

    let files = io::scan_markdown_files(&settings.input_dir, settings.recursive)?;
    log::info!(
        "Found {} markdown files in {}",
        files.len(),
        settings.input_dir.display()
    );

    let pipeline = Pipeline::markdown();
    let mut written = 0;
    for file in &files {
        let converter = HtmlConverter::new(shell_for(file, settings));
        let html = io::convert_file(file, &converter, &pipeline, settings.full_html)
            .with_context(|| format!("Failed to convert '{}'", file.display()))?;

        let target = io::output_path(
            file,
            &settings.input_dir,
            settings.output_dir.as_deref(),
            converter.extension(),
        );
        io::write_output(&target, &html)
            .with_context(|| format!("Failed to write '{}'", target.display()))?;
        log::info!("{} -> {}", file.display(), target.display());
        log::debug!("{} output:\n{html}", converter.name());
        written += 1;
    }

    Ok(written)
}

fn shell_for(file: &Path, settings: &Settings) -> Shell {
    let mut shell = Shell::new();
    if let Some(stem) = file.file_stem() {
        shell = shell.with_title(stem.to_string_lossy());
    }
    if let Some(href) = &settings.stylesheet {
        shell = shell.with_stylesheet(href);
    }
    shell
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = load_config(&args)?;
    let settings = Settings::resolve(&args, config)?;
    let written = run(&settings)?;
    log::info!("Converted {written} files");
    Ok(())
}
