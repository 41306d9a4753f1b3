use crate::{
    cursor::TokenCursor,
    matcher::{
        block_construct::BlockConstruct,
        error::{BlockMatchError, BlockMatchResult},
    },
    syntax::LuaTokenKind,
};

/// Match the block opened by `opener` at nesting `level`.
///
/// With `advanced` set the cursor is already past the opener, otherwise it
/// sits on it. Unknown openers fail without consuming anything.
pub fn match_start<C: TokenCursor + ?Sized>(
    cursor: &mut C,
    level: usize,
    opener: LuaTokenKind,
    advanced: bool,
) -> BlockMatchResult {
    match BlockConstruct::from_opener(opener, level) {
        Some(construct) => match_end(cursor, construct, advanced, level),
        None => Err(BlockMatchError::UnknownOpener(opener)),
    }
}

/// Scan forward to the terminator of `construct`.
///
/// At level 0 the terminator is left for the caller; deeper levels consume
/// it, so the enclosing scan resumes right after the nested block.
///
/// A failed scan is not rewound at any level, level 0 included: the cursor
/// may end up anywhere up to the end of input. `lazy_block` relies on this to
/// collapse the partial span it reached; other callers that need the cursor
/// back take a marker first.
pub fn match_end<C: TokenCursor + ?Sized>(
    cursor: &mut C,
    construct: BlockConstruct,
    advanced: bool,
    level: usize,
) -> BlockMatchResult {
    let skips = construct.skip_set();
    let stops = construct.stop_set();

    if !advanced {
        cursor.bump();
    }
    let mut kind = cursor.current_token();

    loop {
        if cursor.is_eof() {
            return Err(BlockMatchError::UnterminatedBlock {
                opener: construct.opener(),
            });
        }

        while !skips.contains(kind) {
            if stops.contains(kind) {
                if level != 0 {
                    cursor.bump();
                }
                return Ok(());
            }
            if match_start(cursor, level + 1, kind, false).is_err() {
                break;
            }
            kind = cursor.current_token();
        }

        cursor.bump();
        kind = cursor.current_token();
    }
}
