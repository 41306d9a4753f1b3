// Lazy block collapsing tests
use super::{cursor_for, seek_past};
use crate::*;
use LuaTokenKind::{
    TkAssign,
    TkDo,
    TkElse,
    TkElseIf,
    TkEnd,
    TkRepeat,
    TkRightParen,
    TkThen,
    TkUntil,
};

fn collapse_after(text: &str, opener: LuaTokenKind, nth: usize) -> (LuaTokenCursor<'_>, bool) {
    let mut cursor = cursor_for(text);
    seek_past(&mut cursor, opener, nth);
    let ok = lazy_block(&mut cursor, 0);
    (cursor, ok)
}

fn block_text<'a>(cursor: &LuaTokenCursor<'a>) -> &'a str {
    assert_eq!(cursor.nodes().len(), 1);
    let node = cursor.nodes()[0];
    assert_eq!(node.kind, LuaSyntaxKind::Block);
    assert!(node.collapsed);
    cursor.node_text(&node)
}

#[test]
fn test_do_block_body() {
    let (cursor, ok) = collapse_after("do local a = 1 end", TkDo, 0);
    assert!(ok);
    assert_eq!(block_text(&cursor), " local a = 1 ");
    assert_eq!(cursor.current_token(), TkEnd);
    assert_eq!(cursor.open_marker_count(), 0);
    assert!(check_latest_done(&cursor, LuaSyntaxKind::Block));
}

#[test]
fn test_function_body_after_params() {
    let (cursor, ok) = collapse_after("function f(a) return a end", TkRightParen, 0);
    assert!(ok);
    assert_eq!(block_text(&cursor), " return a ");
    assert_eq!(cursor.current_token(), TkEnd);
}

#[test]
fn test_body_with_nested_blocks() {
    let (cursor, _) = collapse_after("while x do if y then z end end", TkDo, 0);
    assert_eq!(block_text(&cursor), " if y then z end ");
    assert_eq!(cursor.current_token_range().end_offset(), 30);
}

#[test]
fn test_then_branch_stops_at_elseif() {
    let (cursor, _) = collapse_after("if a then b elseif c then d else e end", TkThen, 0);
    assert_eq!(block_text(&cursor), " b ");
    assert_eq!(cursor.current_token(), TkElseIf);

    let (cursor, _) = collapse_after("if a then b elseif c then d else e end", TkElse, 0);
    assert_eq!(block_text(&cursor), " e ");
    assert_eq!(cursor.current_token(), TkEnd);
}

#[test]
fn test_repeat_body() {
    let (cursor, _) = collapse_after("repeat\n  x = x + 1\nuntil x > 3", TkRepeat, 0);
    assert_eq!(block_text(&cursor), "\n  x = x + 1\n");
    assert_eq!(cursor.current_token(), TkUntil);
}

#[test]
fn test_comment_between_opener_and_body() {
    let (cursor, _) = collapse_after("do -- note\n x end", TkDo, 0);
    assert_eq!(block_text(&cursor), " -- note\n x ");
    assert_eq!(cursor.current_token(), TkEnd);
}

#[test]
fn test_empty_body() {
    let (cursor, ok) = collapse_after("do end", TkDo, 0);
    assert!(ok);
    assert_eq!(block_text(&cursor), " ");
    let node = cursor.nodes()[0];
    assert_eq!((node.token_start, node.token_end), (1, 2));
    assert_eq!(cursor.current_token(), TkEnd);
}

#[test]
fn test_unterminated_body_still_collapses() {
    let (cursor, ok) = collapse_after("do local a = 1", TkDo, 0);
    assert!(ok);
    assert_eq!(block_text(&cursor), " local a = 1");
    assert!(cursor.is_eof());
    assert_eq!(cursor.open_marker_count(), 0);
}

#[test]
fn test_non_opener_collapses_empty_block() {
    let (cursor, ok) = collapse_after("x = y end", TkAssign, 0);
    assert!(ok);
    assert_eq!(block_text(&cursor), " ");
    assert_eq!(cursor.current_token_text(), "y");
}

#[test]
fn test_start_of_file_does_nothing() {
    let mut cursor = cursor_for("  x = 1");
    assert!(lazy_block(&mut cursor, 0));
    assert!(cursor.nodes().is_empty());
    assert_eq!(cursor.current_token_text(), "x");
}

#[test]
fn test_earlier_nodes_survive_collapse() {
    let mut cursor = cursor_for("x do f() end");
    let marker = cursor.mark();
    cursor.bump();
    marker.done(&mut cursor, LuaSyntaxKind::NameExpr);
    seek_past(&mut cursor, TkDo, 0);
    lazy_block(&mut cursor, 0);

    let kinds: Vec<_> = cursor.nodes().iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![LuaSyntaxKind::NameExpr, LuaSyntaxKind::Block]);
    assert_eq!(cursor.node_text(&cursor.nodes()[1]), " f() ");
}
