use crate::{
    cursor::{TokenCursor, TriviaBinder},
    syntax::LuaSyntaxKind,
};

/// Checkpoint over a `TokenCursor`.
///
/// Every terminal operation takes the marker by value, so a marker can be
/// closed at most once.
#[derive(Debug)]
#[must_use = "a marker must be rolled back, dropped, done or collapsed"]
pub struct Marker {
    id: u32,
    position: usize,
    consumed_end: usize,
    node_count: usize,
    left_binder: TriviaBinder,
    right_binder: TriviaBinder,
}

impl Marker {
    pub fn new(id: u32, position: usize, consumed_end: usize, node_count: usize) -> Marker {
        Marker {
            id,
            position,
            consumed_end,
            node_count,
            left_binder: TriviaBinder::Default,
            right_binder: TriviaBinder::Default,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Cursor position when the marker was taken.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn consumed_end(&self) -> usize {
        self.consumed_end
    }

    /// Number of finished nodes when the marker was taken.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn left_binder(&self) -> TriviaBinder {
        self.left_binder
    }

    pub fn right_binder(&self) -> TriviaBinder {
        self.right_binder
    }

    pub fn set_edge_binders(&mut self, left: TriviaBinder, right: TriviaBinder) {
        self.left_binder = left;
        self.right_binder = right;
    }

    /// Restore the cursor and forget every node finished since the marker.
    pub fn rollback<C: TokenCursor + ?Sized>(self, cursor: &mut C) {
        cursor.rollback_marker(self);
    }

    /// Keep the consumed tokens but build nothing.
    pub fn drop<C: TokenCursor + ?Sized>(self, cursor: &mut C) {
        cursor.drop_marker(self);
    }

    pub fn done<C: TokenCursor + ?Sized>(self, cursor: &mut C, kind: LuaSyntaxKind) {
        cursor.done_marker(self, kind, false);
    }

    /// Finish a node whose interior is left unparsed.
    pub fn collapse<C: TokenCursor + ?Sized>(self, cursor: &mut C, kind: LuaSyntaxKind) {
        cursor.done_marker(self, kind, true);
    }
}
