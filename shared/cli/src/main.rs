use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use congruent_core::{generate, parse_integer, preview, DecimalPlaces, GenerationInput, Method};
use congruent_export::{export_csv, render_preview, render_table, write_json};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "congruent")]
#[command(about = "Derive parameters for and generate congruential pseudo-random sequences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the derived a, g and m for the current k and P
    Preview(PreviewArgs),
    /// Validate the inputs and generate the full sequence
    Generate(GenerateArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MethodArg {
    /// a = 1 + 4k, x' = (a x + c) mod m
    Lcg,
    /// a = 3 + 8k, x' = a x mod m
    McgA3,
    /// a = 5 + 8k, x' = a x mod m
    McgA5,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::Lcg => Method::Lcg,
            MethodArg::McgA3 => Method::McgA3,
            MethodArg::McgA5 => Method::McgA5,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Json,
}

// Integer fields are taken as text so that blanks and non-integers are
// reported by the validator in rule order, not by the argument parser.
#[derive(Args, Debug)]
struct PreviewArgs {
    #[arg(long, value_enum, default_value_t = MethodArg::Lcg)]
    method: MethodArg,

    #[arg(long, allow_hyphen_values = true)]
    k: Option<String>,

    /// Desired period P
    #[arg(long, allow_hyphen_values = true)]
    period: Option<String>,

    /// Increment c (linear generator only)
    #[arg(long, allow_hyphen_values = true)]
    increment: Option<String>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    params: PreviewArgs,

    /// Seed X0
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,

    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=10))]
    decimal_places: u8,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also write the rows as CSV into this directory
    #[arg(long)]
    export: Option<PathBuf>,
}

fn field(raw: &Option<String>) -> Option<i64> {
    raw.as_deref().and_then(parse_integer)
}

fn run_preview(args: &PreviewArgs) {
    let preview = preview(
        field(&args.k),
        field(&args.period),
        args.method.into(),
        field(&args.increment),
    );
    print!("{}", render_preview(&preview));
}

fn run_generate(args: &GenerateArgs) -> Result<ExitCode> {
    let input = GenerationInput {
        method: args.params.method.into(),
        seed: field(&args.seed),
        k: field(&args.params.k),
        period: field(&args.params.period),
        increment: field(&args.params.increment),
        decimal_places: DecimalPlaces::new(args.decimal_places)?,
    };

    let sequence = match generate(&input) {
        Ok(sequence) => sequence,
        Err(err) => {
            debug!(?input, "rejected");
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    match args.format {
        OutputFormat::Table => print!("{}", render_table(&sequence)),
        OutputFormat::Json => {
            write_json(&sequence, io::stdout().lock()).context("writing json to stdout")?;
            println!();
        }
    }

    if let Some(dir) = &args.export {
        let path = export_csv(&sequence, dir)
            .with_context(|| format!("exporting to {}", dir.display()))?;
        info!("Wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "congruent=info,congruent_core=info,congruent_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Preview(args) => {
            run_preview(args);
            Ok(ExitCode::SUCCESS)
        }
        Command::Generate(args) => run_generate(args),
    }
}
