//! # flowblocks - Campaign Script Block Forests
//!
//! **flowblocks** works on the nested block structure behind a campaign's
//! mission and dialogue scripts. A script is a *forest*: an ordered list of
//! blocks, some of which are containers owning named, ordered slots of child
//! blocks (a MISSION's `blocksMission` and `blocksFinish`, an IF's
//! `thenBlocks` and `elseBlocks`, the phases of BUILD and FLIGHT, and the
//! generic `children` of scripts, menus and options).
//!
//! ## Core Workflow
//!
//! 1.  **Load**: Parse the editor's JSON with [`format::load_forest_from_str`], or build
//!     [`FlowBlock`](block::FlowBlock)s in code. Other formats can implement [`format::IntoForest`].
//! 2.  **Flatten**: [`collector::collect_all_blocks`] returns every block in pre-order,
//!     containers before their contents and slots in their declared order.
//! 3.  **Inspect or clean**: query ids with [`ids`], normalize with [`cleaner`],
//!     render with [`outline::OutlineFormatter`].
//! 4.  **Save or export**: write the forest back with [`format::forest_to_json`] or export a
//!     SCRIPT block as a [`format::ScriptDocument`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowblocks::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"[{
//!         "id": "1", "type": "MISSION",
//!         "blocksMission": [{ "id": "2", "type": "IF",
//!                             "thenBlocks": [{ "id": "3", "type": "LABEL" }] }],
//!         "blocksFinish": [{ "id": "4", "type": "LABEL" }]
//!     }]"#;
//!
//!     let forest = load_forest_from_str(json)?;
//!     let ids: Vec<&str> = collect_all_blocks(&forest)
//!         .iter()
//!         .map(|block| block.id.as_str())
//!         .collect();
//!     assert_eq!(ids, ["1", "2", "3", "4"]);
//!
//!     println!("{}", OutlineFormatter::format_forest(&forest));
//!     Ok(())
//! }
//! ```

pub mod block;
pub mod cleaner;
pub mod collector;
pub mod error;
pub mod format;
pub mod ids;
pub mod outline;
pub mod prelude;
