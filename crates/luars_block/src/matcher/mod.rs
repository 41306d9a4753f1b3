mod balanced;
mod block_construct;
mod block_matcher;
mod error;
mod lazy_block;
mod repeat_probe;

pub use crate::matcher::{
    balanced::{fast_check_args, fast_check_table, scan_balanced},
    block_construct::BlockConstruct,
    block_matcher::{match_end, match_start},
    error::{BlockMatchError, BlockMatchResult},
    lazy_block::lazy_block,
    repeat_probe::repeat_probe,
};

use crate::{cursor::TokenCursor, syntax::LuaSyntaxKind};

/// `true` when the node completed last has the given kind.
pub fn check_latest_done<C: TokenCursor + ?Sized>(cursor: &C, kind: LuaSyntaxKind) -> bool {
    cursor.latest_done_kind() == Some(kind)
}
