//! The flow block model.
//!
//! A [`FlowBlock`] carries the fields every block shares (id, container flag,
//! parameters, the generic `children` slot, opaque attributes) and a
//! [`BlockBody`] holding the slots specific to its kind. Which slots a kind
//! declares, and the order they are walked in, is fixed per body variant by
//! [`BlockBody::slot_order`].

mod kind;
mod slot;

pub use kind::BlockType;
pub use slot::Slot;

use slot::{BUILD_SLOTS, FLIGHT_SLOTS, GENERIC_SLOTS, IF_SLOTS, MISSION_SLOTS};

/// Free-form key/value data attached to a block.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// The kind-specific part of a block. Each slot is `None` when absent and
/// `Some(vec![])` when present but empty.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    Mission {
        blocks_mission: Option<Vec<FlowBlock>>,
        blocks_finish: Option<Vec<FlowBlock>>,
    },
    If {
        then_blocks: Option<Vec<FlowBlock>>,
        else_blocks: Option<Vec<FlowBlock>>,
    },
    Build {
        block_init: Option<Vec<FlowBlock>>,
        block_start: Option<Vec<FlowBlock>>,
    },
    Flight {
        block_init: Option<Vec<FlowBlock>>,
        block_start: Option<Vec<FlowBlock>>,
        block_evaluate: Option<Vec<FlowBlock>>,
    },
    Script {
        script_name: Option<String>,
        file_name: Option<String>,
    },
    /// Any kind that declares no slot beyond `children`.
    Simple(BlockType),
}

impl BlockBody {
    /// Creates the body variant matching `block_type`, with every slot absent.
    pub fn for_type(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Mission => BlockBody::Mission {
                blocks_mission: None,
                blocks_finish: None,
            },
            BlockType::If => BlockBody::If {
                then_blocks: None,
                else_blocks: None,
            },
            BlockType::Build => BlockBody::Build {
                block_init: None,
                block_start: None,
            },
            BlockType::Flight => BlockBody::Flight {
                block_init: None,
                block_start: None,
                block_evaluate: None,
            },
            BlockType::Script => BlockBody::Script {
                script_name: None,
                file_name: None,
            },
            other => BlockBody::Simple(other),
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockBody::Mission { .. } => BlockType::Mission,
            BlockBody::If { .. } => BlockType::If,
            BlockBody::Build { .. } => BlockType::Build,
            BlockBody::Flight { .. } => BlockType::Flight,
            BlockBody::Script { .. } => BlockType::Script,
            BlockBody::Simple(block_type) => block_type.clone(),
        }
    }

    /// The slots this body declares, in traversal order.
    pub fn slot_order(&self) -> &'static [Slot] {
        match self {
            BlockBody::Mission { .. } => MISSION_SLOTS,
            BlockBody::If { .. } => IF_SLOTS,
            BlockBody::Build { .. } => BUILD_SLOTS,
            BlockBody::Flight { .. } => FLIGHT_SLOTS,
            BlockBody::Script { .. } | BlockBody::Simple(_) => GENERIC_SLOTS,
        }
    }

    /// Storage for a kind-specific slot, or `None` if this body does not declare it.
    fn slot_storage(&self, slot: Slot) -> Option<&Option<Vec<FlowBlock>>> {
        match (self, slot) {
            (BlockBody::Mission { blocks_mission, .. }, Slot::BlocksMission) => Some(blocks_mission),
            (BlockBody::Mission { blocks_finish, .. }, Slot::BlocksFinish) => Some(blocks_finish),
            (BlockBody::If { then_blocks, .. }, Slot::ThenBlocks) => Some(then_blocks),
            (BlockBody::If { else_blocks, .. }, Slot::ElseBlocks) => Some(else_blocks),
            (BlockBody::Build { block_init, .. }, Slot::BlockInit)
            | (BlockBody::Flight { block_init, .. }, Slot::BlockInit) => Some(block_init),
            (BlockBody::Build { block_start, .. }, Slot::BlockStart)
            | (BlockBody::Flight { block_start, .. }, Slot::BlockStart) => Some(block_start),
            (BlockBody::Flight { block_evaluate, .. }, Slot::BlockEvaluate) => Some(block_evaluate),
            _ => None,
        }
    }

    fn slot_storage_mut(&mut self, slot: Slot) -> Option<&mut Option<Vec<FlowBlock>>> {
        match (self, slot) {
            (BlockBody::Mission { blocks_mission, .. }, Slot::BlocksMission) => Some(blocks_mission),
            (BlockBody::Mission { blocks_finish, .. }, Slot::BlocksFinish) => Some(blocks_finish),
            (BlockBody::If { then_blocks, .. }, Slot::ThenBlocks) => Some(then_blocks),
            (BlockBody::If { else_blocks, .. }, Slot::ElseBlocks) => Some(else_blocks),
            (BlockBody::Build { block_init, .. }, Slot::BlockInit)
            | (BlockBody::Flight { block_init, .. }, Slot::BlockInit) => Some(block_init),
            (BlockBody::Build { block_start, .. }, Slot::BlockStart)
            | (BlockBody::Flight { block_start, .. }, Slot::BlockStart) => Some(block_start),
            (BlockBody::Flight { block_evaluate, .. }, Slot::BlockEvaluate) => Some(block_evaluate),
            _ => None,
        }
    }
}

/// A single node of a block forest.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowBlock {
    /// Unique within a forest. Empty when the block has not been given an id yet.
    pub id: String,
    pub is_container: bool,
    pub parameters: Option<Parameters>,
    pub children: Option<Vec<FlowBlock>>,
    pub body: BlockBody,
    /// Every other field of the source data, written back unchanged.
    pub attributes: Parameters,
}

impl FlowBlock {
    /// Creates a block of the given type with all slots absent.
    pub fn new(id: impl Into<String>, block_type: impl Into<BlockType>) -> Self {
        let block_type = block_type.into();
        Self {
            id: id.into(),
            is_container: block_type.is_container_kind(),
            parameters: None,
            children: None,
            body: BlockBody::for_type(block_type),
            attributes: Parameters::new(),
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.body.block_type()
    }

    pub fn is_type(&self, block_type: &BlockType) -> bool {
        &self.body.block_type() == block_type
    }

    pub fn slot_order(&self) -> &'static [Slot] {
        self.body.slot_order()
    }

    /// The blocks held in `slot`. `None` if the slot is absent or not declared by this kind.
    pub fn slot(&self, slot: Slot) -> Option<&[FlowBlock]> {
        let storage = match slot {
            Slot::Children => Some(&self.children),
            other => self.body.slot_storage(other),
        };
        storage.and_then(|blocks| blocks.as_deref())
    }

    /// Mutable storage for `slot`, or `None` if this kind does not declare it.
    pub fn slot_mut(&mut self, slot: Slot) -> Option<&mut Option<Vec<FlowBlock>>> {
        match slot {
            Slot::Children => Some(&mut self.children),
            other => self.body.slot_storage_mut(other),
        }
    }

    /// Every declared, present slot in traversal order.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, &[FlowBlock])> {
        self.slot_order()
            .iter()
            .filter_map(move |&slot| self.slot(slot).map(|blocks| (slot, blocks)))
    }

    pub fn script_name(&self) -> Option<&str> {
        match &self.body {
            BlockBody::Script { script_name, .. } => script_name.as_deref(),
            _ => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match &self.body {
            BlockBody::Script { file_name, .. } => file_name.as_deref(),
            _ => None,
        }
    }

    /// Sets `slot` to `blocks`. Slots this kind does not declare are left untouched.
    pub fn with_slot(mut self, slot: Slot, blocks: Vec<FlowBlock>) -> Self {
        if let Some(storage) = self.slot_mut(slot) {
            *storage = Some(blocks);
        }
        self
    }

    pub fn with_children(self, children: Vec<FlowBlock>) -> Self {
        self.with_slot(Slot::Children, children)
    }

    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::new)
            .insert(key.into(), value.into());
        self
    }

    /// Names a SCRIPT block. Has no effect on other kinds.
    pub fn with_script(mut self, name: impl Into<String>, file: impl Into<String>) -> Self {
        if let BlockBody::Script {
            script_name,
            file_name,
        } = &mut self.body
        {
            *script_name = Some(name.into());
            *file_name = Some(file.into());
        }
        self
    }
}

impl BlockType {
    /// Whether blocks of this type own nested blocks by default.
    pub fn is_container_kind(&self) -> bool {
        matches!(
            self,
            BlockType::Script
                | BlockType::Mission
                | BlockType::Menu
                | BlockType::Opt
                | BlockType::If
                | BlockType::Build
                | BlockType::Flight
        )
    }
}
