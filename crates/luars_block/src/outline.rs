use crate::{
    cursor::{LuaSyntaxNode, LuaTokenCursor, TokenCursor},
    matcher::lazy_block,
    syntax::{LuaTokenKind, ParserConfig},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum FunctionHeader {
    None,
    Name,
    Params,
}

/// Collapse every top-level block body of `text` and return the blocks in
/// source order.
///
/// This is the smallest grammar that drives `lazy_block`: it only knows which
/// tokens introduce a body (`do`, `then`, `else`, `repeat` and the `)` closing
/// a function header) and steps over everything else.
pub fn collect_lazy_blocks(text: &str, config: &ParserConfig) -> Vec<LuaSyntaxNode> {
    let mut cursor = LuaTokenCursor::from_source(text, config);
    collapse_top_level_blocks(&mut cursor);
    cursor.into_nodes()
}

pub fn collapse_top_level_blocks(cursor: &mut LuaTokenCursor<'_>) {
    let mut header = FunctionHeader::None;
    while !cursor.is_eof() {
        let kind = cursor.current_token();
        cursor.bump();

        let opens_body = match (kind, header) {
            (LuaTokenKind::TkFunction, _) => {
                header = FunctionHeader::Name;
                false
            }
            (LuaTokenKind::TkLeftParen, FunctionHeader::Name) => {
                header = FunctionHeader::Params;
                false
            }
            (LuaTokenKind::TkRightParen, FunctionHeader::Params) => {
                header = FunctionHeader::None;
                true
            }
            // a header that never reached its `(` is abandoned at the next
            // body keyword or `end`
            (
                LuaTokenKind::TkDo
                | LuaTokenKind::TkThen
                | LuaTokenKind::TkElse
                | LuaTokenKind::TkRepeat,
                FunctionHeader::Name,
            ) => {
                header = FunctionHeader::None;
                true
            }
            (LuaTokenKind::TkEnd, FunctionHeader::Name) => {
                header = FunctionHeader::None;
                false
            }
            (_, FunctionHeader::Name | FunctionHeader::Params) => false,
            (
                LuaTokenKind::TkDo
                | LuaTokenKind::TkThen
                | LuaTokenKind::TkElse
                | LuaTokenKind::TkRepeat,
                FunctionHeader::None,
            ) => true,
            _ => false,
        };

        if opens_body {
            lazy_block(cursor, 0);
        }
    }
}
