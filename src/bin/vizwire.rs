use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vizwire::{Document, Jsonable as _};

#[derive(Parser, Debug)]
#[command(name = "vizwire", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a definition document and report every invalid entry.
    Validate(ValidateArgs),
    /// Build a definition document and write the rendering payload.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input definition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input definition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the payload.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_document(path: &Path) -> anyhow::Result<Document> {
    Document::from_path(path).with_context(|| format!("load definition '{}'", path.display()))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    doc.validate()?;
    eprintln!(
        "ok: {} chart(s), {} filter(s)",
        doc.chart_count(),
        doc.filter_count()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let bundle = doc.build()?;
    let json = if args.pretty {
        bundle.to_json_pretty()?
    } else {
        bundle.to_json()?
    };

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json.as_bytes())
                .with_context(|| format!("write payload '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write payload to stdout")?;
        }
    }
    Ok(())
}
