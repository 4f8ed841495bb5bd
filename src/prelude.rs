//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the flowblocks crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowblocks::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let forest = load_forest_from_file("path/to/script.json")?;
//!
//! println!("{} blocks", count_blocks(&forest));
//! for block in collect_all_blocks(&forest) {
//!     println!("{} {}", block.block_type(), block.id);
//! }
//! # Ok(())
//! # }
//! ```

// Block model
pub use crate::block::{BlockBody, BlockType, FlowBlock, Parameters, Slot};

// Traversal
pub use crate::collector::{PreOrder, collect_all_blocks};

// Id management and cleaning
pub use crate::cleaner::{
    cleanup_script_blocks, count_blocks_by_type, is_valid_script_block,
    normalize_block_structure, remove_empty_blocks, validate_script_block,
};
pub use crate::ids::{
    all_blocks_have_ids, assign_missing_ids, count_blocks, duplicate_ids, find_block_by_id,
    generate_block_id, has_valid_id,
};

// Wire format
pub use crate::format::{
    IntoForest, RawBlock, ScriptDocument, forest_to_json, load_forest_from_file,
    load_forest_from_str, save_forest_to_file,
};

// Error types
pub use crate::error::{ConversionError, ForestError, ScriptValidationError};

// Outline formatting
pub use crate::outline::OutlineFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
