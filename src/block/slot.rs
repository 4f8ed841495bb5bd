use std::fmt;

/// A named, ordered collection of child blocks owned by a container block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    BlocksMission,
    BlocksFinish,
    ThenBlocks,
    ElseBlocks,
    BlockInit,
    BlockStart,
    BlockEvaluate,
    /// The generic slot every block kind may carry.
    Children,
}

impl Slot {
    /// Every slot, in no particular traversal order.
    pub const ALL: [Slot; 8] = [
        Slot::BlocksMission,
        Slot::BlocksFinish,
        Slot::ThenBlocks,
        Slot::ElseBlocks,
        Slot::BlockInit,
        Slot::BlockStart,
        Slot::BlockEvaluate,
        Slot::Children,
    ];

    /// The JSON key holding this slot.
    pub fn json_key(self) -> &'static str {
        match self {
            Slot::BlocksMission => "blocksMission",
            Slot::BlocksFinish => "blocksFinish",
            Slot::ThenBlocks => "thenBlocks",
            Slot::ElseBlocks => "elseBlocks",
            Slot::BlockInit => "blockInit",
            Slot::BlockStart => "blockStart",
            Slot::BlockEvaluate => "blockEvaluate",
            Slot::Children => "children",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

// Slot declaration order per body kind. `Children` is always walked last.
pub(crate) const MISSION_SLOTS: &[Slot] = &[Slot::BlocksMission, Slot::BlocksFinish, Slot::Children];
pub(crate) const IF_SLOTS: &[Slot] = &[Slot::ThenBlocks, Slot::ElseBlocks, Slot::Children];
pub(crate) const BUILD_SLOTS: &[Slot] = &[Slot::BlockInit, Slot::BlockStart, Slot::Children];
pub(crate) const FLIGHT_SLOTS: &[Slot] = &[
    Slot::BlockInit,
    Slot::BlockStart,
    Slot::BlockEvaluate,
    Slot::Children,
];
pub(crate) const GENERIC_SLOTS: &[Slot] = &[Slot::Children];
