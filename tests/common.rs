//! Common test utilities for building block forests.
use flowblocks::prelude::*;

/// A LABEL leaf with the given id.
#[allow(dead_code)]
pub fn label(id: &str) -> FlowBlock {
    FlowBlock::new(id, BlockType::Label)
}

/// The mission used throughout the traversal tests.
///
/// Shape: `MISSION 1 { blocksMission: [IF 2 { then: [LABEL 3] }], blocksFinish: [LABEL 4] }`
#[allow(dead_code)]
pub fn create_simple_mission() -> FlowBlock {
    FlowBlock::new("1", BlockType::Mission)
        .with_slot(
            Slot::BlocksMission,
            vec![FlowBlock::new("2", BlockType::If).with_slot(Slot::ThenBlocks, vec![label("3")])],
        )
        .with_slot(Slot::BlocksFinish, vec![label("4")])
}

/// A forest touching every container kind and the generic `children` slot.
///
/// Expected pre-order:
/// `script, say1, mission, m-if, m-then, m-else, m-finish, build, b-init, b-start,
///  flight, f-init, f-start, f-eval, f-child, menu, opt, opt-say, trailer`
#[allow(dead_code)]
pub fn create_complex_forest() -> Vec<FlowBlock> {
    let script = FlowBlock::new("script", BlockType::Script)
        .with_script("intro", "intro.txt")
        .with_children(vec![
            FlowBlock::new("say1", BlockType::Say).with_parameter("text", "Welcome, pilot"),
            FlowBlock::new("mission", BlockType::Mission)
                .with_slot(
                    Slot::BlocksMission,
                    vec![
                        FlowBlock::new("m-if", BlockType::If)
                            .with_slot(Slot::ThenBlocks, vec![label("m-then")])
                            .with_slot(Slot::ElseBlocks, vec![label("m-else")]),
                    ],
                )
                .with_slot(Slot::BlocksFinish, vec![label("m-finish")]),
            FlowBlock::new("build", BlockType::Build)
                .with_slot(Slot::BlockInit, vec![label("b-init")])
                .with_slot(Slot::BlockStart, vec![label("b-start")]),
            FlowBlock::new("flight", BlockType::Flight)
                .with_slot(Slot::BlockInit, vec![label("f-init")])
                .with_slot(Slot::BlockStart, vec![label("f-start")])
                .with_slot(Slot::BlockEvaluate, vec![label("f-eval")])
                .with_children(vec![label("f-child")]),
            FlowBlock::new("menu", BlockType::Menu).with_children(vec![
                FlowBlock::new("opt", BlockType::Opt).with_children(vec![FlowBlock::new(
                    "opt-say",
                    BlockType::Say,
                )]),
            ]),
        ]);
    vec![script, label("trailer")]
}

#[allow(dead_code)]
pub const COMPLEX_FOREST_ORDER: [&str; 19] = [
    "script", "say1", "mission", "m-if", "m-then", "m-else", "m-finish", "build", "b-init",
    "b-start", "flight", "f-init", "f-start", "f-eval", "f-child", "menu", "opt", "opt-say",
    "trailer",
];

/// Ids of `blocks`, in order.
#[allow(dead_code)]
pub fn ids_of<'a>(blocks: impl IntoIterator<Item = &'a FlowBlock>) -> Vec<&'a str> {
    blocks.into_iter().map(|block| block.id.as_str()).collect()
}

/// A chain of `depth` nested IF blocks ending in a LABEL.
#[allow(dead_code)]
pub fn create_deep_chain(depth: usize) -> Vec<FlowBlock> {
    let mut current = label("leaf");
    for level in (0..depth).rev() {
        current = FlowBlock::new(format!("if-{}", level), BlockType::If)
            .with_slot(Slot::ThenBlocks, vec![current]);
    }
    vec![current]
}

/// The editor JSON for a small mission script, as the campaign editor saves it.
#[allow(dead_code)]
pub const MISSION_SCRIPT_JSON: &str = r#"{
  "name": "tutorial",
  "fileName": "tutorial.txt",
  "blocks": [
    {
      "id": "mission-1",
      "type": "MISSION",
      "isContainer": true,
      "missionType": "STORY",
      "position": { "x": 40, "y": 120 },
      "blocksMission": [
        { "id": "say-1", "type": "SAY", "parameters": { "text": { "EN": "Hello", "DE": "Hallo" } } },
        {
          "id": "if-1",
          "type": "IF",
          "isContainer": true,
          "ifType": "IF_IS",
          "thenBlocks": [ { "id": "go-1", "type": "GO", "parameters": { "label": "end" } } ],
          "elseBlocks": []
        }
      ],
      "blocksFinish": [ { "id": "label-1", "type": "LABEL", "parameters": { "name": "end" } } ]
    },
    { "id": "custom-1", "type": "HOLOGRAM", "parameters": { "image": "holo.png" } }
  ]
}"#;
