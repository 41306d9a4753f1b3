use crate::{
    cursor::TokenCursor,
    matcher::error::{BlockMatchError, BlockMatchResult},
    syntax::LuaTokenKind,
};

/// Check that the `open` delimiter under the cursor has a matching `close`.
///
/// Only `open`/`close` are counted, other bracket kinds are ordinary tokens.
/// The cursor is restored whatever the outcome.
pub fn scan_balanced<C: TokenCursor + ?Sized>(
    cursor: &mut C,
    open: LuaTokenKind,
    close: LuaTokenKind,
) -> BlockMatchResult {
    if cursor.current_token() != open {
        return Err(BlockMatchError::UnknownOpener(cursor.current_token()));
    }

    let marker = cursor.mark();
    let mut depth = 1usize;
    while depth != 0 {
        cursor.bump();
        if cursor.is_eof() {
            break;
        }
        let kind = cursor.current_token();
        if kind == open {
            depth += 1;
        } else if kind == close {
            depth -= 1;
        }
    }
    marker.rollback(cursor);

    if depth == 0 {
        Ok(())
    } else {
        Err(BlockMatchError::UnbalancedDelimiter { open, close })
    }
}

/// Fast rejection for call arguments: `(` with a balanced `)`.
pub fn fast_check_args<C: TokenCursor + ?Sized>(cursor: &mut C, _level: usize) -> bool {
    scan_balanced(cursor, LuaTokenKind::TkLeftParen, LuaTokenKind::TkRightParen).is_ok()
}

/// Fast rejection for table constructors: `{` with a balanced `}`.
pub fn fast_check_table<C: TokenCursor + ?Sized>(cursor: &mut C, _level: usize) -> bool {
    scan_balanced(cursor, LuaTokenKind::TkLeftBrace, LuaTokenKind::TkRightBrace).is_ok()
}
