pub mod test_block_matcher;
pub mod test_lazy_block;

use crate::*;

pub fn cursor_for(text: &str) -> LuaTokenCursor<'_> {
    LuaTokenCursor::from_source(text, &ParserConfig::default())
}

/// Bump until the `nth` (0-based) occurrence of `kind` is the current token.
pub fn seek(cursor: &mut LuaTokenCursor<'_>, kind: LuaTokenKind, nth: usize) {
    let mut seen = 0;
    while !cursor.is_eof() {
        if cursor.current_token() == kind {
            if seen == nth {
                return;
            }
            seen += 1;
        }
        cursor.bump();
    }
    panic!("token {kind} #{nth} not found");
}

/// Bump past the `nth` occurrence of `kind`.
pub fn seek_past(cursor: &mut LuaTokenCursor<'_>, kind: LuaTokenKind, nth: usize) {
    seek(cursor, kind, nth);
    cursor.bump();
}

pub fn raw_index_of_last(cursor: &LuaTokenCursor<'_>, kind: LuaTokenKind) -> usize {
    cursor
        .tokens()
        .iter()
        .rposition(|t| t.kind == kind)
        .expect("token kind present")
}

pub fn kinds(text: &str) -> Vec<LuaTokenKind> {
    syntax::tokenize(text, LexerConfig::default())
        .iter()
        .map(|t| t.kind)
        .collect()
}
