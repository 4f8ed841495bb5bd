use crate::block::FlowBlock;
use std::slice;

/// Depth-first, pre-order iterator over every block reachable from a forest.
///
/// A block is yielded before its descendants. The slots of a block are walked
/// in the order given by [`FlowBlock::slot_order`], each one fully before the
/// next. Pending work is kept on an explicit stack, so nesting depth is not
/// limited by the call stack.
pub struct PreOrder<'a> {
    stack: Vec<slice::Iter<'a, FlowBlock>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(forest: &'a [FlowBlock]) -> Self {
        Self {
            stack: vec![forest.iter()],
        }
    }

    /// Queues the slots of `block` so that its first slot is walked next.
    fn push_slots(&mut self, block: &'a FlowBlock) {
        for &slot in block.slot_order().iter().rev() {
            if let Some(blocks) = block.slot(slot) {
                if !blocks.is_empty() {
                    self.stack.push(blocks.iter());
                }
            }
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a FlowBlock;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(block) => {
                    self.push_slots(block);
                    return Some(block);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Flattens a forest into every reachable block, containers before their contents.
pub fn collect_all_blocks(forest: &[FlowBlock]) -> Vec<&FlowBlock> {
    PreOrder::new(forest).collect()
}
