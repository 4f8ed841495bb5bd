//! Cleaning and normalization passes over a block forest.
//!
//! Every pass consumes the forest and returns the cleaned one. Slots that are
//! present but empty stay present unless a pass says otherwise: an empty
//! `elseBlocks` records that the else-branch is enabled.

use crate::block::{BlockType, FlowBlock, Slot};
use crate::collector::PreOrder;
use crate::error::ScriptValidationError;
use ahash::AHashMap;
use tracing::debug;

/// Replaces every SCRIPT block without a script name by its own children.
pub fn cleanup_script_blocks(forest: Vec<FlowBlock>) -> Vec<FlowBlock> {
    let mut cleaned = Vec::with_capacity(forest.len());
    for mut block in forest {
        if is_anonymous_script(&block) {
            debug!(id = %block.id, "unwrapping anonymous SCRIPT block");
            if let Some(children) = block.children.take() {
                cleaned.extend(cleanup_script_blocks(children));
            }
        } else {
            map_slots(&mut block, cleanup_script_blocks);
            cleaned.push(block);
        }
    }
    cleaned
}

/// Drops containers left without content.
///
/// SAY, DELAY, GO and LABEL are always kept. SCRIPT, MENU and OPT survive only
/// with non-empty children, IF only with a non-empty then or else branch.
/// Anything else is kept with its slots cleaned.
pub fn remove_empty_blocks(forest: Vec<FlowBlock>) -> Vec<FlowBlock> {
    forest.into_iter().filter_map(prune_block).collect()
}

fn prune_block(mut block: FlowBlock) -> Option<FlowBlock> {
    match block.block_type() {
        BlockType::Say | BlockType::Delay | BlockType::Go | BlockType::Label => Some(block),
        BlockType::Script | BlockType::Menu | BlockType::Opt => {
            let children = remove_empty_blocks(block.children.take().unwrap_or_default());
            if children.is_empty() {
                debug!(id = %block.id, kind = %block.block_type(), "removing empty container");
                None
            } else {
                block.children = Some(children);
                Some(block)
            }
        }
        BlockType::If => {
            map_slots(&mut block, remove_empty_blocks);
            let has_content =
                |slot: Slot| block.slot(slot).is_some_and(|blocks| !blocks.is_empty());
            if has_content(Slot::ThenBlocks) || has_content(Slot::ElseBlocks) {
                Some(block)
            } else {
                debug!(id = %block.id, "removing IF block without branches");
                None
            }
        }
        _ => {
            map_slots(&mut block, remove_empty_blocks);
            Some(block)
        }
    }
}

/// Makes sure SCRIPT, MENU and OPT carry `children` and IF carries `thenBlocks`.
/// `elseBlocks` is never added.
pub fn normalize_block_structure(forest: Vec<FlowBlock>) -> Vec<FlowBlock> {
    forest
        .into_iter()
        .map(|mut block| {
            let required = match block.block_type() {
                BlockType::Script | BlockType::Menu | BlockType::Opt => Some(Slot::Children),
                BlockType::If => Some(Slot::ThenBlocks),
                _ => None,
            };
            if let Some(slot) = required {
                if let Some(storage) = block.slot_mut(slot) {
                    storage.get_or_insert_with(Vec::new);
                }
            }
            map_slots(&mut block, normalize_block_structure);
            block
        })
        .collect()
}

/// Checks that `block` is a SCRIPT with an id, a script name and a file name.
pub fn validate_script_block(block: &FlowBlock) -> Result<(), ScriptValidationError> {
    if !block.is_type(&BlockType::Script) {
        return Err(ScriptValidationError::NotAScript {
            block_id: block.id.clone(),
            found: block.block_type().to_string(),
        });
    }
    if block.script_name().is_none_or(str::is_empty) {
        return Err(ScriptValidationError::MissingScriptName {
            block_id: block.id.clone(),
        });
    }
    if block.file_name().is_none_or(str::is_empty) {
        return Err(ScriptValidationError::MissingFileName {
            block_id: block.id.clone(),
        });
    }
    if block.id.is_empty() {
        return Err(ScriptValidationError::MissingId);
    }
    Ok(())
}

pub fn is_valid_script_block(block: &FlowBlock) -> bool {
    validate_script_block(block).is_ok()
}

/// Number of reachable blocks per type name.
pub fn count_blocks_by_type(forest: &[FlowBlock]) -> AHashMap<String, usize> {
    let mut counts = AHashMap::new();
    for block in PreOrder::new(forest) {
        *counts.entry(block.block_type().to_string()).or_insert(0) += 1;
    }
    counts
}

fn is_anonymous_script(block: &FlowBlock) -> bool {
    block.is_type(&BlockType::Script) && block.script_name().is_none_or(str::is_empty)
}

/// Rewrites every present, declared slot of `block` with `pass`.
fn map_slots(block: &mut FlowBlock, pass: fn(Vec<FlowBlock>) -> Vec<FlowBlock>) {
    for &slot in block.slot_order() {
        if let Some(storage) = block.slot_mut(slot) {
            if let Some(blocks) = storage.take() {
                *storage = Some(pass(blocks));
            }
        }
    }
}
