use clap::Parser;
use flowblocks::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate random block forests for exercising the traversal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_forest.json")]
    output: String,

    /// The number of top-level blocks
    #[arg(long, default_value_t = 3)]
    roots: usize,

    /// The maximum nesting depth below a top-level block
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// The maximum number of blocks generated per slot
    #[arg(long, default_value_t = 4)]
    width: usize,
}

// Leaf kinds drawn for non-container positions.
const LEAF_TYPES: &[BlockType] = &[
    BlockType::Say,
    BlockType::Ask,
    BlockType::Label,
    BlockType::Go,
    BlockType::Delay,
    BlockType::SetVariable,
    BlockType::GiveCard,
    BlockType::NextMission,
];

const CONTAINER_TYPES: &[BlockType] = &[
    BlockType::Mission,
    BlockType::If,
    BlockType::Build,
    BlockType::Flight,
    BlockType::Menu,
    BlockType::Opt,
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if cli.width == 0 {
        eprintln!("Error: --width must be at least 1");
        std::process::exit(1);
    }

    let mut rng = rand::rng();
    let mut next_id = 0usize;
    let forest: Vec<FlowBlock> = (0..cli.roots)
        .map(|_| generate_block(&mut rng, &mut next_id, cli.depth, cli.width))
        .collect();

    let json = forest_to_json(&forest)?;
    fs::write(&cli.output, json)?;

    info!(
        blocks = count_blocks(&forest),
        path = %cli.output,
        "generated block forest"
    );
    Ok(())
}

/// Generates one block and, while depth remains, a random subtree in each of its slots.
fn generate_block(
    rng: &mut ThreadRng,
    next_id: &mut usize,
    depth: usize,
    width: usize,
) -> FlowBlock {
    *next_id += 1;
    let id = format!("b{}", next_id);

    let make_container = depth > 0 && rng.random_bool(0.4);
    if !make_container {
        let block_type = LEAF_TYPES[rng.random_range(0..LEAF_TYPES.len())].clone();
        return FlowBlock::new(id, block_type).with_parameter("seq", *next_id as u64);
    }

    let block_type = CONTAINER_TYPES[rng.random_range(0..CONTAINER_TYPES.len())].clone();
    let mut block = FlowBlock::new(id, block_type);
    for &slot in block.slot_order() {
        // Kind-specific slots are always filled; the generic one only sometimes.
        if slot == Slot::Children && block.slot_order().len() > 1 && rng.random_bool(0.8) {
            continue;
        }
        let count = rng.random_range(0..=width);
        let children = (0..count)
            .map(|_| generate_block(rng, next_id, depth - 1, width))
            .collect();
        block = block.with_slot(slot, children);
    }
    block
}
