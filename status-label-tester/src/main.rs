mod fixtures;
mod reports;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use status_label_core::{LABEL_CONTEXT, StatusClassTable, StatusClassifier, StatusLabelInput};
use status_label_web::components::status_label::Props;
use status_label_web::{Classifier, ssr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "status-label-tester", version)]
#[command(about = "Render status labels and check badge fixtures")]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Status class table (JSON) replacing the bundled one
    #[arg(long, global = true)]
    classes: Option<PathBuf>,

    /// Optional path to write output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a props file to HTML
    Render {
        #[arg(long)]
        props: PathBuf,
    },
    /// Check fixtures of props and expected badges
    Check {
        #[arg(long)]
        fixtures: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
        report: ReportFormat,
    },
    /// Print the class assigned to each status
    Classify {
        #[arg(required = true)]
        statuses: Vec<String>,
        #[arg(long, default_value = LABEL_CONTEXT)]
        context: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let table = load_class_table(args.classes.as_deref())?;
    let mut output_target = OutputTarget::new(args.output.clone())?;

    let all_passed = match &args.command {
        Command::Render { props } => {
            let html = render_file(props, table).await?;
            writeln!(output_target, "{html}")?;
            true
        }
        Command::Check { fixtures, report } => {
            check_fixtures(&mut output_target, fixtures, *report, &table)?
        }
        Command::Classify { statuses, context } => {
            for status in statuses {
                writeln!(
                    output_target,
                    "{status}\t{}",
                    table.status_class(status, context)
                )?;
            }
            true
        }
    };
    output_target.flush_inner()?;

    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_class_table(path: Option<&Path>) -> Result<StatusClassTable> {
    let Some(path) = path else {
        return Ok(StatusClassTable::default_config());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read class table {}", path.display()))?;
    let table = StatusClassTable::from_json(&text)
        .with_context(|| format!("invalid class table {}", path.display()))?;
    log::debug!("loaded class table from {}", path.display());
    Ok(table)
}

async fn render_file(path: &Path, table: StatusClassTable) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read props {}", path.display()))?;
    let input = StatusLabelInput::from_json(&text)
        .with_context(|| format!("failed to parse props {}", path.display()))?;
    if !input.status.is_supported() {
        eprintln!(
            "{}",
            "⚠️  status is neither a string nor a list; nothing rendered".yellow()
        );
    }
    let props = Props {
        classifier: Classifier::new(table),
        ..Props::from(input)
    };
    Ok(ssr::render_props(props).await)
}

fn check_fixtures(
    out: &mut OutputTarget,
    path: &Path,
    report: ReportFormat,
    table: &StatusClassTable,
) -> Result<bool> {
    let start_time = Instant::now();
    let fixtures = fixtures::load_fixtures(path)?;
    let results = fixtures::run_fixtures(&fixtures, table);

    match report {
        ReportFormat::Json => reports::generate_json_report(out, &results)?,
        ReportFormat::Markdown => reports::generate_markdown_report(out, &results)?,
        ReportFormat::Console => {
            reports::generate_console_report(out, &results, start_time.elapsed())?;
        }
    }
    Ok(results.iter().all(|r| r.passed))
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
