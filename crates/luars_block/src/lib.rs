// Lua block matcher
// Finds block boundaries in a Lua token stream so a parser can collapse
// block bodies and parse them on demand

#[cfg(test)]
mod test;

pub mod cursor;
pub mod matcher;
pub mod outline;
pub mod syntax;

pub use cursor::{LuaSyntaxNode, LuaTokenCursor, Marker, TokenCursor, TriviaBinder};
pub use matcher::{
    BlockConstruct, BlockMatchError, BlockMatchResult, check_latest_done, fast_check_args,
    fast_check_table, lazy_block, match_end, match_start, repeat_probe, scan_balanced,
};
pub use outline::collect_lazy_blocks;
pub use syntax::{
    LexerConfig, LuaLanguageLevel, LuaSyntaxKind, LuaTokenData, LuaTokenKind, ParserConfig,
    SourceRange, TokenSet,
};
