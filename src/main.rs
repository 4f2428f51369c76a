use anyhow::{Context, Result};
use caseconv::cli::output::{self, OutputFormat};
use caseconv::cli::{self, Action};
use caseconv::{Config, InputPolicy, NoiseHandling};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert identifiers between camelCase, kebab-case, dot.case and more", long_about = None)]
struct Cli {
    /// Strings to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (defaults to the configured default_style)
    #[arg(short, long)]
    style: Option<String>,

    /// Parse each input as a JSON literal (e.g. "\"user_id\"", null, 123)
    #[arg(short, long)]
    json: bool,

    /// How non-string inputs are treated (strict, lenient)
    #[arg(short, long)]
    policy: Option<InputPolicy>,

    /// How punctuation is treated (split, strip)
    #[arg(short, long)]
    noise: Option<NoiseHandling>,

    /// Print the word tokens instead of converting
    #[arg(short, long)]
    tokens: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Config file to load on top of the global and local ones
    #[arg(short, long, env = "CASECONV_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs failed
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List registered styles with a sample rendering
    Styles,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref(), cli.policy, cli.noise)?;
    let engine = config.build_engine()?;
    debug!(
        "Engine ready: policy={}, noise={}, styles={}",
        engine.policy(),
        engine.noise_handling(),
        engine.style_names().join(",")
    );

    let colored = !cli.no_color;

    if let Some(Commands::Styles) = cli.command {
        return output::print_styles(&engine, colored, cli.format);
    }

    let inputs = if cli.inputs.is_empty() {
        read_stdin_inputs()?
    } else {
        cli.inputs
    };

    // The configured default only matters when no style was asked for.
    let style = match (cli.tokens, cli.style) {
        (true, _) => None,
        (false, Some(style)) => Some(style),
        (false, None) => Some(config.default_style_in(&engine)?.to_string()),
    };
    let action = match &style {
        Some(style) => Action::Convert(style),
        None => Action::Tokenize,
    };

    info!("Processing {} inputs", inputs.len());
    let results = cli::process_batch(&engine, &inputs, cli.json, action);

    output::print_results(&results, colored, cli.format)?;
    if cli.format == OutputFormat::Text {
        output::print_summary(&results, colored);
    }

    // Exit with appropriate code
    if results.iter().any(|r| r.is_failure()) && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_inputs() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No inputs specified. Use --help for usage information.");
    }

    stdin
        .lock()
        .lines()
        .map(|line| line.context("Failed to read input from stdin"))
        .collect()
}
