mod lua_token_cursor;
mod marker;
mod trivia_binder;

pub use crate::cursor::{
    lua_token_cursor::{LuaSyntaxNode, LuaTokenCursor},
    marker::Marker,
    trivia_binder::TriviaBinder,
};

use crate::syntax::{LuaSyntaxKind, LuaTokenKind};

/// Forward-only, markable view over a token stream.
///
/// The forward view never shows trivia; `raw_lookup` is the only way to see
/// whitespace and comments. Markers handed out by `mark` must be closed in
/// LIFO order through the `Marker` methods, which call back into the
/// `*_marker` hooks below.
pub trait TokenCursor {
    /// Kind of the current non-trivia token, `TkEof` past the end.
    fn current_token(&self) -> LuaTokenKind;

    fn bump(&mut self);

    fn is_eof(&self) -> bool;

    /// Raw token kind at `offset` from the current token, trivia included.
    /// `-1` is the token right before the current one.
    fn raw_lookup(&self, offset: isize) -> Option<LuaTokenKind>;

    /// Kind of the most recently completed node, if any.
    fn latest_done_kind(&self) -> Option<LuaSyntaxKind>;

    /// Opaque position, only meaningful for comparing two states of one cursor.
    fn position(&self) -> usize;

    fn mark(&mut self) -> Marker;

    fn rollback_marker(&mut self, marker: Marker);

    fn drop_marker(&mut self, marker: Marker);

    fn done_marker(&mut self, marker: Marker, kind: LuaSyntaxKind, collapsed: bool);
}
