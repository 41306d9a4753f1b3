use crate::{
    cursor::{TokenCursor, TriviaBinder},
    matcher::block_matcher::match_start,
    syntax::{LuaSyntaxKind, LuaTokenKind},
};

/// Collapse the body of the block around the cursor into one `Block` node.
///
/// The cursor must sit on the first token of the body, right after its
/// opener. The opener is found by looking back over trivia; a `)` there is
/// the end of a parameter list, so the body is a function body. At level 0
/// the terminator is not consumed.
///
/// Always returns `true`. When the terminator cannot be found the node still
/// gets collapsed, over whatever the scan consumed, so the grammar always
/// gets a block to work with.
pub fn lazy_block<C: TokenCursor + ?Sized>(cursor: &mut C, _level: usize) -> bool {
    let Some(opener) = find_opener(cursor) else {
        return true;
    };
    let opener = match opener {
        LuaTokenKind::TkRightParen => LuaTokenKind::TkFunction,
        kind => kind,
    };

    let mut marker = cursor.mark();
    marker.set_edge_binders(TriviaBinder::Greedy, TriviaBinder::Greedy);
    if let Err(err) = match_start(cursor, 0, opener, true) {
        log::debug!("lazy block collapsed over a partial span: {err}");
    }
    marker.collapse(cursor, LuaSyntaxKind::Block);
    true
}

fn find_opener<C: TokenCursor + ?Sized>(cursor: &C) -> Option<LuaTokenKind> {
    let mut offset = -1;
    loop {
        let kind = cursor.raw_lookup(offset)?;
        if !kind.is_trivia() {
            return Some(kind);
        }
        offset -= 1;
    }
}
