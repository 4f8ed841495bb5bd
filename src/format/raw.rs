use crate::block::Parameters;
use serde::{Deserialize, Serialize};

/// A block exactly as the editor writes it to JSON.
///
/// Every slot field the editor knows is listed, whatever the block type; the
/// conversion into [`FlowBlock`](crate::block::FlowBlock) decides which ones
/// the type actually declares.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_mission: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_finish: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub then_blocks: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_blocks: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_init: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_start: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_evaluate: Option<Vec<RawBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawBlock>>,

    /// Fields this crate does not interpret (position, optType, text, ...).
    #[serde(flatten)]
    pub extra: Parameters,
}

/// The document produced when a SCRIPT block is exported.
///
/// `blocks` is required and no other keys are allowed, so a lone block object
/// is never mistaken for an empty document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawScriptDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub blocks: Vec<RawBlock>,
}
