//! Tests for the cleaning and normalization passes.
mod common;
use common::*;
use flowblocks::prelude::*;

#[test]
fn test_anonymous_script_is_unwrapped() {
    let forest = vec![
        FlowBlock::new("outer", BlockType::Script).with_children(vec![
            label("a"),
            FlowBlock::new("inner", BlockType::Script).with_children(vec![label("b")]),
        ]),
        label("c"),
    ];

    let cleaned = cleanup_script_blocks(forest);
    assert_eq!(ids_of(&cleaned), ["a", "b", "c"]);
}

#[test]
fn test_named_script_is_kept_and_cleaned_inside() {
    let forest = vec![
        FlowBlock::new("main", BlockType::Script)
            .with_script("main", "main.txt")
            .with_children(vec![
                FlowBlock::new("if", BlockType::If)
                    .with_slot(
                        Slot::ThenBlocks,
                        vec![FlowBlock::new("anon", BlockType::Script).with_children(vec![label("t")])],
                    )
                    .with_slot(Slot::ElseBlocks, vec![]),
            ]),
    ];

    let cleaned = cleanup_script_blocks(forest);
    assert_eq!(ids_of(collect_all_blocks(&cleaned)), ["main", "if", "t"]);

    // An empty else-branch stays present.
    let if_block = find_block_by_id(&cleaned, "if").unwrap();
    assert_eq!(if_block.slot(Slot::ElseBlocks), Some(&[][..]));
}

#[test]
fn test_anonymous_script_without_children_disappears() {
    let forest = vec![FlowBlock::new("s", BlockType::Script), label("keep")];
    assert_eq!(ids_of(&cleanup_script_blocks(forest)), ["keep"]);
}

#[test]
fn test_remove_empty_blocks_drops_empty_containers() {
    let forest = vec![
        FlowBlock::new("empty-menu", BlockType::Menu).with_children(vec![]),
        FlowBlock::new("menu", BlockType::Menu).with_children(vec![
            FlowBlock::new("empty-opt", BlockType::Opt),
            FlowBlock::new("opt", BlockType::Opt).with_children(vec![FlowBlock::new("say", BlockType::Say)]),
        ]),
        FlowBlock::new("if-empty", BlockType::If).with_slot(Slot::ThenBlocks, vec![]),
        FlowBlock::new("if-else", BlockType::If)
            .with_slot(Slot::ThenBlocks, vec![])
            .with_slot(Slot::ElseBlocks, vec![FlowBlock::new("delay", BlockType::Delay)]),
        label("label"),
        FlowBlock::new("go", BlockType::Go),
    ];

    let cleaned = remove_empty_blocks(forest);
    assert_eq!(
        ids_of(collect_all_blocks(&cleaned)),
        ["menu", "opt", "say", "if-else", "delay", "label", "go"]
    );
}

#[test]
fn test_remove_empty_blocks_cascades() {
    // The OPT loses its only child, so the MENU is left empty too.
    let forest = vec![
        FlowBlock::new("menu", BlockType::Menu).with_children(vec![
            FlowBlock::new("opt", BlockType::Opt).with_children(vec![
                FlowBlock::new("if", BlockType::If).with_slot(Slot::ThenBlocks, vec![]),
            ]),
        ]),
    ];
    assert!(remove_empty_blocks(forest).is_empty());
}

#[test]
fn test_remove_empty_blocks_keeps_other_kinds_and_cleans_them() {
    let forest = vec![
        FlowBlock::new("mission", BlockType::Mission)
            .with_slot(
                Slot::BlocksMission,
                vec![FlowBlock::new("menu", BlockType::Menu), label("l")],
            )
            .with_slot(Slot::BlocksFinish, vec![]),
        FlowBlock::new("var", BlockType::SetVariable),
    ];

    let cleaned = remove_empty_blocks(forest);
    assert_eq!(ids_of(collect_all_blocks(&cleaned)), ["mission", "l", "var"]);
    assert_eq!(cleaned[0].slot(Slot::BlocksFinish), Some(&[][..]));
}

#[test]
fn test_normalize_adds_required_slots() {
    let forest = vec![
        FlowBlock::new("script", BlockType::Script).with_children(vec![
            FlowBlock::new("menu", BlockType::Menu),
            FlowBlock::new("if", BlockType::If),
        ]),
        FlowBlock::new("opt", BlockType::Opt),
        label("label"),
    ];

    let normalized = normalize_block_structure(forest);

    let menu = find_block_by_id(&normalized, "menu").unwrap();
    assert_eq!(menu.slot(Slot::Children), Some(&[][..]));

    let if_block = find_block_by_id(&normalized, "if").unwrap();
    assert_eq!(if_block.slot(Slot::ThenBlocks), Some(&[][..]));
    assert_eq!(if_block.slot(Slot::ElseBlocks), None);
    assert_eq!(if_block.slot(Slot::Children), None);

    assert_eq!(normalized[1].slot(Slot::Children), Some(&[][..]));
    assert_eq!(normalized[2].slot(Slot::Children), None);
}

#[test]
fn test_normalize_keeps_existing_content() {
    let forest = create_complex_forest();
    let normalized = normalize_block_structure(forest.clone());
    assert_eq!(
        ids_of(collect_all_blocks(&normalized)),
        ids_of(collect_all_blocks(&forest))
    );
}

#[test]
fn test_validate_script_block() {
    let valid = FlowBlock::new("s1", BlockType::Script).with_script("intro", "intro.txt");
    assert!(validate_script_block(&valid).is_ok());
    assert!(is_valid_script_block(&valid));

    let unnamed = FlowBlock::new("s2", BlockType::Script);
    assert_eq!(
        validate_script_block(&unnamed),
        Err(ScriptValidationError::MissingScriptName {
            block_id: "s2".to_string()
        })
    );

    let no_file = FlowBlock::new("s3", BlockType::Script).with_script("intro", "");
    assert_eq!(
        validate_script_block(&no_file),
        Err(ScriptValidationError::MissingFileName {
            block_id: "s3".to_string()
        })
    );

    let no_id = FlowBlock::new("", BlockType::Script).with_script("intro", "intro.txt");
    assert_eq!(
        validate_script_block(&no_id),
        Err(ScriptValidationError::MissingId)
    );

    let not_script = label("l");
    assert!(!is_valid_script_block(&not_script));
    match validate_script_block(&not_script) {
        Err(ScriptValidationError::NotAScript { block_id, found }) => {
            assert_eq!(block_id, "l");
            assert_eq!(found, "LABEL");
        }
        other => panic!("Expected NotAScript error, got {:?}", other),
    }
}

#[test]
fn test_count_blocks_by_type() {
    let counts = count_blocks_by_type(&create_complex_forest());

    assert_eq!(counts.get("LABEL"), Some(&10));
    assert_eq!(counts.get("SAY"), Some(&2));
    assert_eq!(counts.get("SCRIPT"), Some(&1));
    assert_eq!(counts.get("FLIGHT"), Some(&1));
    assert_eq!(counts.get("GO"), None);
    assert_eq!(counts.values().sum::<usize>(), 19);
}
