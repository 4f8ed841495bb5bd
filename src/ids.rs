//! Block id generation and id-based queries over a forest.

use crate::block::FlowBlock;
use crate::collector::PreOrder;
use itertools::Itertools;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates an id of the form `<TYPE>-<unix millis>-<random base36 suffix>`.
pub fn generate_block_id(block_type: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", block_type, millis, suffix)
}

/// Gives every block without an id a generated one. Returns how many ids were assigned.
pub fn assign_missing_ids(forest: &mut [FlowBlock]) -> usize {
    let mut assigned = 0;
    for block in forest.iter_mut() {
        if !has_valid_id(block) {
            block.id = generate_block_id(&block.block_type().to_string());
            debug!(id = %block.id, "assigned missing block id");
            assigned += 1;
        }
        for &slot in block.slot_order() {
            if let Some(Some(blocks)) = block.slot_mut(slot) {
                assigned += assign_missing_ids(blocks);
            }
        }
    }
    assigned
}

pub fn has_valid_id(block: &FlowBlock) -> bool {
    !block.id.is_empty()
}

/// Whether every reachable block has a non-empty id. True for an empty forest.
pub fn all_blocks_have_ids(forest: &[FlowBlock]) -> bool {
    PreOrder::new(forest).all(has_valid_id)
}

pub fn count_blocks(forest: &[FlowBlock]) -> usize {
    PreOrder::new(forest).count()
}

/// The first block in pre-order whose id is `block_id`.
pub fn find_block_by_id<'a>(forest: &'a [FlowBlock], block_id: &str) -> Option<&'a FlowBlock> {
    PreOrder::new(forest).find(|block| block.id == block_id)
}

/// Ids that occur more than once, each reported once, in order of their second occurrence.
/// Empty ids are ignored.
pub fn duplicate_ids(forest: &[FlowBlock]) -> Vec<String> {
    PreOrder::new(forest)
        .filter(|block| has_valid_id(block))
        .map(|block| block.id.as_str())
        .duplicates()
        .map(str::to_string)
        .collect()
}
