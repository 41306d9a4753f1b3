use thiserror::Error;

use crate::syntax::LuaTokenKind;

/// Why a boundary scan failed. None of these abort a parse; the grammar
/// treats them as "this alternative does not apply".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockMatchError {
    #[error("unbalanced '{open}': input ended before the matching '{close}'")]
    UnbalancedDelimiter {
        open: LuaTokenKind,
        close: LuaTokenKind,
    },
    #[error("'{0}' does not open a block")]
    UnknownOpener(LuaTokenKind),
    #[error("block opened by '{opener}' is not terminated")]
    UnterminatedBlock { opener: LuaTokenKind },
}

pub type BlockMatchResult = Result<(), BlockMatchError>;
