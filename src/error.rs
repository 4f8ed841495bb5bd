use thiserror::Error;

/// Errors that can occur while loading or saving a block forest.
#[derive(Error, Debug, Clone)]
pub enum ForestError {
    #[error("Failed to parse block forest JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to write block forest JSON: {0}")]
    JsonWriteError(String),

    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors that can occur when converting an external block format into `FlowBlock`s.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Block at '{path}' has no 'type' field")]
    MissingType { path: String },

    #[error("Could not keep undeclared slot at '{path}': {message}")]
    Serialization { path: String, message: String },
}

/// Reasons a block is not a usable SCRIPT block.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptValidationError {
    #[error("Block '{block_id}' is a {found} block, not a SCRIPT")]
    NotAScript { block_id: String, found: String },

    #[error("SCRIPT block has no id")]
    MissingId,

    #[error("SCRIPT block '{block_id}' has no script name")]
    MissingScriptName { block_id: String },

    #[error("SCRIPT block '{block_id}' has no file name")]
    MissingFileName { block_id: String },
}
