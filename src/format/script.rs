use super::conversion::IntoForest;
use super::raw::{RawBlock, RawScriptDocument};
use crate::block::{BlockType, FlowBlock};
use crate::error::ForestError;

/// A SCRIPT block exported as a standalone document: its name, file and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptDocument {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub blocks: Vec<FlowBlock>,
}

impl ScriptDocument {
    /// Exports the first top-level SCRIPT block of `forest`, if there is one.
    pub fn from_forest(forest: &[FlowBlock]) -> Option<Self> {
        let script = forest
            .iter()
            .find(|block| block.is_type(&BlockType::Script))?;
        Some(Self {
            name: script.script_name().map(str::to_string),
            file_name: script.file_name().map(str::to_string),
            blocks: script.children.clone().unwrap_or_default(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ForestError> {
        Self::from_raw(super::parse_json(json)?)
    }

    pub(crate) fn from_raw(raw: RawScriptDocument) -> Result<Self, ForestError> {
        Ok(Self {
            name: raw.name,
            file_name: raw.file_name,
            blocks: raw.blocks.into_forest()?,
        })
    }

    pub fn to_json(&self) -> Result<String, ForestError> {
        let raw = RawScriptDocument {
            name: self.name.clone(),
            file_name: self.file_name.clone(),
            blocks: self.blocks.iter().map(RawBlock::from).collect(),
        };
        serde_json::to_string_pretty(&raw).map_err(|e| ForestError::JsonWriteError(e.to_string()))
    }
}
