//! The editor's JSON block format: loading, saving and script export.

pub mod conversion;
pub mod raw;
pub mod script;

pub use conversion::*;
pub use raw::*;
pub use script::*;

use crate::block::FlowBlock;
use crate::error::ForestError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a forest from JSON.
///
/// Accepts either a top-level array of blocks or an exported script document
/// (`{ "name": ..., "fileName": ..., "blocks": [...] }`), in which case its
/// `blocks` are the forest. Nesting depth is not limited.
pub fn load_forest_from_str(json: &str) -> Result<Vec<FlowBlock>, ForestError> {
    let forest = match json.trim_start().as_bytes().first() {
        Some(b'[') => parse_json::<Vec<RawBlock>>(json)?.into_forest()?,
        Some(b'{') => ScriptDocument::from_raw(parse_json(json)?)?.blocks,
        _ => {
            return Err(ForestError::JsonParseError(
                "expected an array of blocks or a script document".to_string(),
            ));
        }
    };

    debug!(top_level = forest.len(), "loaded block forest");
    Ok(forest)
}

/// Deserializes without serde_json's recursion limit, growing the stack on demand.
pub(crate) fn parse_json<T: DeserializeOwned>(json: &str) -> Result<T, ForestError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value: T = Deserialize::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(|e| ForestError::JsonParseError(e.to_string()))?;
    deserializer
        .end()
        .map_err(|e| ForestError::JsonParseError(e.to_string()))?;
    Ok(value)
}

pub fn load_forest_from_file(path: impl AsRef<Path>) -> Result<Vec<FlowBlock>, ForestError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ForestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_forest_from_str(&content)
}

/// Writes a forest as pretty-printed JSON. Absent and empty slots are kept apart.
pub fn forest_to_json(forest: &[FlowBlock]) -> Result<String, ForestError> {
    let raw: Vec<RawBlock> = forest.iter().map(RawBlock::from).collect();
    serde_json::to_string_pretty(&raw).map_err(|e| ForestError::JsonWriteError(e.to_string()))
}

pub fn save_forest_to_file(forest: &[FlowBlock], path: impl AsRef<Path>) -> Result<(), ForestError> {
    let path = path.as_ref();
    let json = forest_to_json(forest)?;
    fs::write(path, json).map_err(|e| ForestError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
