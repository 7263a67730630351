mod commands;
mod config;
mod output;
mod theme;
mod views;

use anyhow::{Context, Result};
use clap::{ColorChoice, Command, CommandFactory, FromArgMatches, Parser};
use colored::{Colorize, control::ShouldColorize};
use log::debug;
use std::path::PathBuf;

use commands::{Commands, examples, handle_command};
use config::{AppConfig, CONFIG_ENV, ConfigSource};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{Tone, glyph, help_styles};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    (CONFIG_ENV, "Path to the photogram.toml configuration file"),
    ("RUST_LOG", "Log filter, e.g. photogram=debug"),
];

#[derive(Parser)]
#[command(name = "photogram")]
#[command(version = "0.1.0")]
#[command(
    about = "Explore a seeded in-memory photo-sharing graph",
    long_about = r#"Seeds a demo social graph in memory and runs queries against it:

• Users, posts, comments, likes and follows generated from a fixed seed
• Tag, author and name search
• Timelines built from who each user follows

Every invocation seeds a fresh graph; nothing is persisted.
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (defaults to ./photogram.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn parse_styled() -> Self {
        let matches = styled_command().get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

fn styled_command() -> Command {
    let color = ShouldColorize::from_env().should_colorize();
    let mut command = Cli::command()
        .styles(help_styles())
        .color(if color { ColorChoice::Auto } else { ColorChoice::Never })
        .after_long_help(environment_help(color));

    let names: Vec<String> = command.get_subcommands().map(|sub| sub.get_name().to_string()).collect();
    for name in names {
        let lines = examples(&name);
        if !lines.is_empty() {
            command = command.mut_subcommand(&name, |sub| sub.after_long_help(examples_help(lines, color)));
        }
    }
    command
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color { text.color(tone.color()).bold().to_string() } else { text.to_string() }
}

fn examples_help(lines: &[&str], color: bool) -> String {
    let mut help = paint("Examples:", Tone::Heading, color);
    for line in lines {
        help.push_str(&format!("\n  {} {line}", paint(glyph::PROMPT, Tone::Command, color)));
    }
    help
}

fn environment_help(color: bool) -> String {
    let mut help = paint("Environment:", Tone::Heading, color);
    for (key, description) in ENVIRONMENT_VARIABLES {
        help.push_str(&format!("\n  {}  {description}", paint(key, Tone::Label, color)));
    }
    help.push_str("\n\nRun 'photogram <command> --help' for examples.");
    help
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn main() {
    let cli = Cli::parse_styled();
    init_logging(cli.verbose);

    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output.clone(),
        quiet: cli.quiet,
        no_color: cli.no_color,
    });

    if let Err(err) = execute(cli, &output) {
        output.error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn execute(cli: Cli, output: &OutputManager) -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let (config, source) = AppConfig::resolve(cli.config.as_deref(), &current_dir)?;
    match &source {
        ConfigSource::File(path) => output.info(&format!("Using configuration from {}", path.display())),
        ConfigSource::Defaults => debug!("no configuration file found, using defaults"),
    }

    handle_command(cli.command, &config, output)
}
