use clap::{Parser, Subcommand};
use flowblocks::prelude::*;
use itertools::Itertools;
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inspect, check and clean campaign script block forests
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the block forest JSON file (an array of blocks or an exported script)
    forest_path: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the id of every block in traversal order
    Collect {
        /// Also print each block's type
        #[arg(short, long)]
        types: bool,
    },
    /// Print the total number of blocks and the count per type
    Stats,
    /// Report blocks without an id and duplicated ids
    Check,
    /// Print an indented outline of the forest
    Outline,
    /// Unwrap anonymous scripts, drop empty containers and normalize slots
    Clean {
        /// Where to write the cleaned forest (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export the first SCRIPT block as a script document
    Export {
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Give every block without an id a generated one
    AssignIds {
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let load_start = Instant::now();
    let forest = load_forest_from_file(&cli.forest_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load forest from '{}': {}",
            cli.forest_path, e
        ))
    });
    info!(
        path = %cli.forest_path,
        top_level = forest.len(),
        elapsed = ?load_start.elapsed(),
        "loaded forest"
    );

    match cli.command.unwrap_or(Command::Collect { types: false }) {
        Command::Collect { types } => run_collect(&forest, types),
        Command::Stats => run_stats(&forest),
        Command::Check => run_check(&forest),
        Command::Outline => print!("{}", OutlineFormatter::format_forest(&forest)),
        Command::Clean { output } => run_clean(forest, output),
        Command::Export { output } => run_export(&forest, output),
        Command::AssignIds { output } => run_assign_ids(forest, output),
    }
}

fn run_collect(forest: &[FlowBlock], types: bool) {
    for block in collect_all_blocks(forest) {
        if types {
            println!("{}\t{}", block.id, block.block_type());
        } else {
            println!("{}", block.id);
        }
    }
}

fn run_stats(forest: &[FlowBlock]) {
    let counts = count_blocks_by_type(forest);
    println!("Total blocks: {}", count_blocks(forest));
    for (type_name, count) in counts
        .iter()
        .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
    {
        println!("  {:<20} {}", type_name, count);
    }
}

fn run_check(forest: &[FlowBlock]) {
    let missing = collect_all_blocks(forest)
        .into_iter()
        .filter(|block| !has_valid_id(block))
        .count();
    let duplicates = duplicate_ids(forest);

    if missing == 0 && duplicates.is_empty() {
        println!("All {} blocks have unique ids.", count_blocks(forest));
        return;
    }

    if missing > 0 {
        println!("{} block(s) without an id", missing);
    }
    for id in &duplicates {
        println!("Duplicate id: {}", id);
    }
    std::process::exit(1);
}

fn run_clean(forest: Vec<FlowBlock>, output: Option<String>) {
    let before = count_blocks(&forest);
    let cleaned = normalize_block_structure(remove_empty_blocks(cleanup_script_blocks(forest)));
    info!(before, after = count_blocks(&cleaned), "cleaned forest");

    let json = forest_to_json(&cleaned)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize forest: {}", e)));
    write_output(output, &json);
}

fn run_export(forest: &[FlowBlock], output: Option<String>) {
    let document = ScriptDocument::from_forest(forest)
        .unwrap_or_else(|| exit_with_error("The forest has no top-level SCRIPT block to export"));
    let json = document
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize script: {}", e)));
    write_output(output, &json);
}

fn run_assign_ids(mut forest: Vec<FlowBlock>, output: Option<String>) {
    let assigned = assign_missing_ids(&mut forest);
    info!(assigned, "assigned missing ids");

    let json = forest_to_json(&forest)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize forest: {}", e)));
    write_output(output, &json);
}

fn write_output(output: Option<String>, content: &str) {
    match output {
        Some(path) => {
            fs::write(&path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            info!(path = %path, "wrote output");
        }
        None => println!("{}", content),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
