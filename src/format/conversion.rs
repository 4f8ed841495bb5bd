use super::raw::RawBlock;
use crate::block::{BlockBody, BlockType, FlowBlock, Slot};
use crate::error::ConversionError;

/// A trait for external block representations that can be converted into a forest of `FlowBlock`s.
///
/// The JSON wire type [`RawBlock`] implements it; other editors' formats can plug in the same way.
///
/// # Example
///
/// ```rust,no_run
/// use flowblocks::block::{BlockType, FlowBlock};
/// use flowblocks::error::ConversionError;
/// use flowblocks::format::IntoForest;
///
/// struct Step { id: String, kind: String }
/// struct Outline { steps: Vec<Step> }
///
/// impl IntoForest for Outline {
///     fn into_forest(self) -> Result<Vec<FlowBlock>, ConversionError> {
///         Ok(self
///             .steps
///             .into_iter()
///             .map(|step| FlowBlock::new(step.id, BlockType::from_name(&step.kind)))
///             .collect())
///     }
/// }
/// ```
pub trait IntoForest {
    /// Consumes the object and converts it into an ordered forest.
    fn into_forest(self) -> Result<Vec<FlowBlock>, ConversionError>;
}

impl IntoForest for Vec<RawBlock> {
    fn into_forest(self) -> Result<Vec<FlowBlock>, ConversionError> {
        convert_blocks(self, "")
    }
}

fn convert_blocks(raw: Vec<RawBlock>, prefix: &str) -> Result<Vec<FlowBlock>, ConversionError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, block)| convert_block(block, &format!("{}[{}]", prefix, index)))
        .collect()
}

fn convert_block(raw: RawBlock, path: &str) -> Result<FlowBlock, ConversionError> {
    let type_name = raw.block_type.ok_or_else(|| ConversionError::MissingType {
        path: path.to_string(),
    })?;

    let mut block = FlowBlock::new(raw.id.unwrap_or_default(), BlockType::from_name(&type_name));
    if let Some(is_container) = raw.is_container {
        block.is_container = is_container;
    }
    block.parameters = raw.parameters;
    block.attributes = raw.extra;

    if let BlockBody::Script {
        script_name,
        file_name,
    } = &mut block.body
    {
        *script_name = raw.script_name;
        *file_name = raw.file_name;
    } else {
        // Only SCRIPT blocks interpret these; keep them for the round trip.
        if let Some(name) = raw.script_name {
            block.attributes.insert("scriptName".to_string(), name.into());
        }
        if let Some(name) = raw.file_name {
            block.attributes.insert("fileName".to_string(), name.into());
        }
    }

    let raw_slots = [
        (Slot::BlocksMission, raw.blocks_mission),
        (Slot::BlocksFinish, raw.blocks_finish),
        (Slot::ThenBlocks, raw.then_blocks),
        (Slot::ElseBlocks, raw.else_blocks),
        (Slot::BlockInit, raw.block_init),
        (Slot::BlockStart, raw.block_start),
        (Slot::BlockEvaluate, raw.block_evaluate),
        (Slot::Children, raw.children),
    ];

    for (slot, blocks) in raw_slots {
        let Some(blocks) = blocks else {
            continue;
        };
        let slot_path = format!("{}.{}", path, slot);
        match block.slot_mut(slot) {
            Some(storage) => *storage = Some(convert_blocks(blocks, &slot_path)?),
            None => {
                // Undeclared for this type: not traversed, but not lost either.
                let value = serde_json::to_value(blocks).map_err(|e| {
                    ConversionError::Serialization {
                        path: slot_path,
                        message: e.to_string(),
                    }
                })?;
                block.attributes.insert(slot.json_key().to_string(), value);
            }
        }
    }

    Ok(block)
}

impl From<&FlowBlock> for RawBlock {
    fn from(block: &FlowBlock) -> Self {
        let convert = |slot: Slot| -> Option<Vec<RawBlock>> {
            block
                .slot(slot)
                .map(|blocks| blocks.iter().map(RawBlock::from).collect())
        };

        RawBlock {
            id: (!block.id.is_empty()).then(|| block.id.clone()),
            block_type: Some(block.block_type().to_string()),
            is_container: Some(block.is_container),
            parameters: block.parameters.clone(),
            script_name: block.script_name().map(str::to_string),
            file_name: block.file_name().map(str::to_string),
            blocks_mission: convert(Slot::BlocksMission),
            blocks_finish: convert(Slot::BlocksFinish),
            then_blocks: convert(Slot::ThenBlocks),
            else_blocks: convert(Slot::ElseBlocks),
            block_init: convert(Slot::BlockInit),
            block_start: convert(Slot::BlockStart),
            block_evaluate: convert(Slot::BlockEvaluate),
            children: convert(Slot::Children),
            extra: block.attributes.clone(),
        }
    }
}
