use crate::syntax::{LuaTokenKind, TokenSet};

const SKIP_IF: TokenSet = TokenSet::new(&[
    LuaTokenKind::TkThen,
    LuaTokenKind::TkElse,
    LuaTokenKind::TkElseIf,
]);
const SKIP_NESTED_THEN: TokenSet = TokenSet::new(&[LuaTokenKind::TkElse, LuaTokenKind::TkElseIf]);
const STOP_END: TokenSet = TokenSet::new(&[LuaTokenKind::TkEnd]);
const STOP_UNTIL: TokenSet = TokenSet::new(&[LuaTokenKind::TkUntil]);
const STOP_THEN: TokenSet = TokenSet::new(&[
    LuaTokenKind::TkElse,
    LuaTokenKind::TkElseIf,
    LuaTokenKind::TkEnd,
]);

/// Block constructs the matcher knows how to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockConstruct {
    Do,
    Repeat,
    If,
    /// `then` at the level being matched: the branch ends at the next
    /// `elseif`/`else`/`end`.
    Then,
    /// `then` met while skipping over an outer construct: it runs through its
    /// sibling branches to the `end`.
    NestedThen,
    Else,
    Function,
}

impl BlockConstruct {
    pub fn from_opener(opener: LuaTokenKind, level: usize) -> Option<BlockConstruct> {
        let construct = match opener {
            LuaTokenKind::TkDo => BlockConstruct::Do,
            LuaTokenKind::TkRepeat => BlockConstruct::Repeat,
            LuaTokenKind::TkIf => BlockConstruct::If,
            LuaTokenKind::TkThen if level == 0 => BlockConstruct::Then,
            LuaTokenKind::TkThen => BlockConstruct::NestedThen,
            LuaTokenKind::TkElse => BlockConstruct::Else,
            LuaTokenKind::TkFunction => BlockConstruct::Function,
            _ => return None,
        };
        Some(construct)
    }

    pub fn opener(&self) -> LuaTokenKind {
        match self {
            BlockConstruct::Do => LuaTokenKind::TkDo,
            BlockConstruct::Repeat => LuaTokenKind::TkRepeat,
            BlockConstruct::If => LuaTokenKind::TkIf,
            BlockConstruct::Then | BlockConstruct::NestedThen => LuaTokenKind::TkThen,
            BlockConstruct::Else => LuaTokenKind::TkElse,
            BlockConstruct::Function => LuaTokenKind::TkFunction,
        }
    }

    /// Tokens that belong to the construct but neither end it nor open a
    /// nested block.
    pub fn skip_set(&self) -> TokenSet {
        match self {
            BlockConstruct::If => SKIP_IF,
            BlockConstruct::NestedThen => SKIP_NESTED_THEN,
            _ => TokenSet::EMPTY,
        }
    }

    pub fn stop_set(&self) -> TokenSet {
        match self {
            BlockConstruct::Repeat => STOP_UNTIL,
            BlockConstruct::Then => STOP_THEN,
            _ => STOP_END,
        }
    }
}
