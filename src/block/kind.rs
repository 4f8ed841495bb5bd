use std::fmt;

/// Master macro defining the block type catalog: the enum, its wire names and the lookup.
macro_rules! define_block_types {
    ( $( ($variant:ident, $name:literal) ),* $(,)? ) => {
        /// The discriminant of a flow block, as written in the `type` field.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum BlockType {
            $( $variant, )*
            /// A type name outside the known catalog, kept verbatim.
            Other(String),
        }

        impl BlockType {
            /// The name used in the `type` field of the JSON format.
            pub fn as_str(&self) -> &str {
                match self {
                    $( BlockType::$variant => $name, )*
                    BlockType::Other(name) => name,
                }
            }

            /// Resolves a `type` field value. Unknown names become `Other`.
            pub fn from_name(name: &str) -> Self {
                match name {
                    $( $name => BlockType::$variant, )*
                    other => BlockType::Other(other.to_string()),
                }
            }

            /// Every type of the known catalog, in declaration order.
            pub fn catalog() -> &'static [BlockType] {
                const CATALOG: &[BlockType] = &[ $( BlockType::$variant, )* ];
                CATALOG
            }
        }
    };
}

define_block_types! {
    // Script/Mission
    (Script, "SCRIPT"),
    (Mission, "MISSION"),
    // Text/Dialog
    (Text, "TEXT"),
    (Say, "SAY"),
    (Ask, "ASK"),
    // Menu/Options
    (Menu, "MENU"),
    (Opt, "OPT"),
    (ExitMenu, "EXIT_MENU"),
    // Flow control
    (If, "IF"),
    (Else, "ELSE"),
    (Go, "GO"),
    (Label, "LABEL"),
    (SubScript, "SUB_SCRIPT"),
    // Variables/Progress
    (SetVariable, "SET_VARIABLE"),
    (SetAchievement, "SET_ACHIEVEMENT"),
    (SetProgress, "SET_PROGRESS"),
    // Characters/Ships
    (AddOpponent, "ADD_OPPONENT"),
    (SetShip, "SET_SHIP"),
    (SpawnShip, "SPAWN_SHIP"),
    // Cards/Items
    (GiveCard, "GIVE_CARD"),
    (GivePile, "GIVE_PILE"),
    // Build/Tutorial
    (Build, "BUILD"),
    (BuildTutorial, "BUILD_TUTORIAL"),
    (Flight, "FLIGHT"),
    // System
    (Delay, "DELAY"),
    // Mission/Node
    (NextMission, "NEXT_MISSION"),
    (NextNode, "NEXT_NODE"),
    (SetNodeStatus, "SET_NODE_STATUS"),
    (UnknownCommand, "UNKNOWN_COMMAND"),
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        BlockType::from_name(name)
    }
}
