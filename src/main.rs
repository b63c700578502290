use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use pagesim::common::types::{DEFAULT_FRAME_COUNT, MAX_FRAME_COUNT};
use pagesim::input::{parse_reference_string, InputConfig, SimulationRequest};
use pagesim::render::{
    render_chart, render_comparison, render_description, render_statistics, render_step,
    render_summary_table,
};
use pagesim::{Comparison, Policy, SimulationSession, Statistics};

const HISTORY_FILE: &str = ".pagesim_history";
const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(author, version, about = "pagesim - step through FIFO, LRU and Optimal page replacement")]
struct Cli {
    /// Largest frame count accepted
    #[arg(long, default_value_t = MAX_FRAME_COUNT, global = true)]
    max_frames: usize,

    /// Separator between pages in the reference string
    #[arg(long, default_value_t = ',', global = true)]
    separator: char,

    #[command(subcommand)]
    command: Commands,
}

/// Reference string and frame count shared by the simulation commands
#[derive(clap::Args)]
struct Workload {
    /// Reference string, e.g. "7,0,1,2,0,3"
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    reference: Option<String>,

    /// Read the reference string from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Number of frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,
}

impl Workload {
    fn text(&self) -> Result<String> {
        match (&self.reference, &self.file) {
            (Some(reference), _) => Ok(reference.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read reference string from {}", path.display())),
            (None, None) => bail!("No reference string given"),
        }
    }

    fn request(&self, policy: Policy, config: &InputConfig) -> Result<SimulationRequest> {
        Ok(SimulationRequest::parse(&self.text()?, self.frames, policy, config)?)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one policy and print statistics
    Run {
        /// Replacement policy (fifo, lru, optimal)
        #[arg(short, long, default_value = "fifo")]
        policy: Policy,

        #[command(flatten)]
        workload: Workload,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print every step, not just the summary table
        #[arg(long)]
        steps: bool,
    },

    /// Run every policy on the same input
    Compare {
        #[command(flatten)]
        workload: Workload,
    },

    /// Explain how a policy works
    Describe {
        policy: Policy,
    },

    /// Step through a run interactively
    Shell {
        #[arg(short, long, default_value = "fifo")]
        policy: Policy,

        #[command(flatten)]
        workload: Workload,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = InputConfig {
        max_frames: cli.max_frames,
        separator: cli.separator,
        ..InputConfig::default()
    };

    match cli.command {
        Commands::Run { policy, workload, format, steps } => {
            let result = workload.request(policy, &config)?.run()?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => {
                    println!("{} Simulator ({} frames)", policy.title(), result.frame_count);
                    println!();
                    if steps {
                        for (i, step) in result.iter().enumerate() {
                            println!("{}", render_step(step, i, result.len()));
                        }
                    }
                    println!("{}", render_summary_table(&result));
                    println!();
                    let stats = Statistics::from_result(&result);
                    println!("{}", render_statistics(&stats));
                    println!();
                    println!("{}", render_chart(&stats, CHART_WIDTH));
                }
            }
        }
        Commands::Compare { workload } => {
            let reference = parse_reference_string(&workload.text()?, &config)?;
            let frames = pagesim::input::validate_frame_count(workload.frames, &config)?;
            let comparison = Comparison::run(&reference, frames)?;
            println!("{}", render_comparison(&comparison));
        }
        Commands::Describe { policy } => {
            print!("{}", render_description(policy));
        }
        Commands::Shell { policy, workload } => {
            let session = SimulationSession::start(workload.request(policy, &config)?)?;
            run_shell(session, &config)?;
        }
    }
    Ok(())
}

fn show_current(session: &SimulationSession) {
    match session.current() {
        Some(step) => println!("{}", render_step(step, session.index(), session.len())),
        None => println!("(empty run)"),
    }
}

fn run_shell(mut session: SimulationSession, config: &InputConfig) -> Result<()> {
    println!(
        "{} Simulator. Type 'help' for assistance or 'exit' to quit.",
        session.request().policy.title()
    );
    show_current(&session);

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        match rl.readline("pagesim> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let mut words = line.split_whitespace();
                let command = words.next().unwrap_or_default().to_lowercase();
                let argument = words.collect::<Vec<_>>().join(" ");

                match command.as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => print_help(),
                    "next" | "n" => {
                        if !session.next() {
                            println!("Already at the last step");
                        }
                        show_current(&session);
                    }
                    "prev" | "p" => {
                        if !session.previous() {
                            println!("Already at the first step");
                        }
                        show_current(&session);
                    }
                    "first" => {
                        session.first();
                        show_current(&session);
                    }
                    "last" => {
                        session.last();
                        show_current(&session);
                    }
                    "goto" => match argument.parse::<usize>() {
                        Ok(step) if step >= 1 => match session.goto(step - 1) {
                            Ok(()) => show_current(&session),
                            Err(err) => println!("Error: {}", err),
                        },
                        _ => println!("Usage: goto <step number>"),
                    },
                    "stats" => println!("{}", render_statistics(&session.statistics())),
                    "table" => println!("{}", render_summary_table(session.result())),
                    "chart" => println!("{}", render_chart(&session.statistics(), CHART_WIDTH)),
                    "policy" => match argument.parse::<Policy>() {
                        Ok(policy) => {
                            let request = session.request().with_policy(policy);
                            match session.rerun(request) {
                                Ok(()) => show_current(&session),
                                Err(err) => println!("Error: {}", err),
                            }
                        }
                        Err(err) => println!("Error: {}", err),
                    },
                    "reference" => {
                        let frames = session.request().frame_count;
                        let policy = session.request().policy;
                        match SimulationRequest::parse(&argument, frames, policy, config) {
                            Ok(request) => match session.rerun(request) {
                                Ok(()) => show_current(&session),
                                Err(err) => println!("Error: {}", err),
                            },
                            Err(err) => println!("Error: {}", err),
                        }
                    }
                    _ => println!("Unknown command '{}'. Type 'help' for assistance.", command),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  next | n                  - Show the next step");
    println!("  prev | p                  - Show the previous step");
    println!("  first | last              - Jump to the first or last step");
    println!("  goto <n>                  - Jump to step n (1-based)");
    println!("  stats                     - Show total requests, faults and hit ratio");
    println!("  table                     - Show the summary table");
    println!("  chart                     - Show the hit/fault chart");
    println!("  policy <fifo|lru|optimal> - Rerun with another policy");
    println!("  reference <pages>         - Rerun with another reference string");
    println!("  help                      - Display this help message");
    println!("  exit                      - Exit the shell");
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
