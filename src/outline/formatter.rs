use crate::block::{FlowBlock, Slot};

const INDENT: &str = "  ";

/// Formats block forests into an indented, human-readable outline.
pub struct OutlineFormatter;

impl OutlineFormatter {
    /// One line per block in pre-order. Named slots get a `[slotName]` heading;
    /// the generic `children` slot is nested directly.
    pub fn format_forest(forest: &[FlowBlock]) -> String {
        let mut result = String::new();
        for block in forest {
            Self::format_recursive(block, 0, &mut result);
        }
        result
    }

    fn format_recursive(block: &FlowBlock, depth: usize, out: &mut String) {
        Self::push_line(out, depth, &Self::format_header(block));

        for (slot, blocks) in block.slots() {
            if blocks.is_empty() {
                continue;
            }
            let child_depth = if slot == Slot::Children {
                depth + 1
            } else {
                Self::push_line(out, depth + 1, &format!("[{}]", slot));
                depth + 2
            };
            for child in blocks {
                Self::format_recursive(child, child_depth, out);
            }
        }
    }

    /// `TYPE id`, plus the quoted script name for named SCRIPT blocks.
    fn format_header(block: &FlowBlock) -> String {
        let id = if block.id.is_empty() {
            "(no id)"
        } else {
            block.id.as_str()
        };
        match block.script_name() {
            Some(name) if !name.is_empty() => {
                format!("{} {} \"{}\"", block.block_type(), id, name)
            }
            _ => format!("{} {}", block.block_type(), id),
        }
    }

    fn push_line(out: &mut String, depth: usize, line: &str) {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(line);
        out.push('\n');
    }
}
