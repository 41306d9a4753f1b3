use crate::{
    cursor::{Marker, TokenCursor},
    syntax::{
        LuaSyntaxKind, LuaTokenData, LuaTokenKind, ParserConfig, SourceRange, tokenize,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LuaSyntaxNode {
    pub kind: LuaSyntaxKind,
    /// The interior was skipped, not parsed.
    pub collapsed: bool,
    /// Raw token indices `[token_start, token_end)`, edge trivia included.
    pub token_start: usize,
    pub token_end: usize,
    pub range: SourceRange,
}

/// `TokenCursor` over a tokenized Lua source.
pub struct LuaTokenCursor<'a> {
    text: &'a str,
    tokens: Vec<LuaTokenData>,
    // raw index of the current non-trivia token, `tokens.len()` at eof
    token_index: usize,
    // raw index right after the last consumed non-trivia token
    consumed_end: usize,
    nodes: Vec<LuaSyntaxNode>,
    open_markers: Vec<u32>,
    next_marker_id: u32,
}

impl<'a> LuaTokenCursor<'a> {
    pub fn new(text: &'a str, tokens: Vec<LuaTokenData>) -> LuaTokenCursor<'a> {
        let mut cursor = LuaTokenCursor {
            text,
            tokens,
            token_index: 0,
            consumed_end: 0,
            nodes: Vec::new(),
            open_markers: Vec::new(),
            next_marker_id: 0,
        };
        cursor.token_index = cursor.skip_trivia(0);
        cursor
    }

    pub fn from_source(text: &'a str, config: &ParserConfig) -> LuaTokenCursor<'a> {
        let tokens = tokenize(text, config.lexer_config());
        LuaTokenCursor::new(text, tokens)
    }

    pub fn tokens(&self) -> &[LuaTokenData] {
        &self.tokens
    }

    pub fn nodes(&self) -> &[LuaSyntaxNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<LuaSyntaxNode> {
        self.nodes
    }

    pub fn current_token_index(&self) -> usize {
        self.token_index
    }

    pub fn current_token_range(&self) -> SourceRange {
        match self.tokens.get(self.token_index) {
            Some(token) => token.range,
            None => SourceRange::new(self.text.len(), 0),
        }
    }

    pub fn current_token_text(&self) -> &'a str {
        match self.tokens.get(self.token_index) {
            Some(token) => &self.text[token.range.start_offset..token.range.end_offset()],
            None => "<eof>",
        }
    }

    pub fn node_text(&self, node: &LuaSyntaxNode) -> &'a str {
        &self.text[node.range.start_offset..node.range.end_offset()]
    }

    /// Number of open markers, for checking that a rule balanced its markers.
    pub fn open_marker_count(&self) -> usize {
        self.open_markers.len()
    }

    #[cfg(feature = "serde")]
    pub fn nodes_to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.nodes)
    }

    fn skip_trivia(&self, mut index: usize) -> usize {
        while index < self.tokens.len() && self.tokens[index].is_trivia() {
            index += 1;
        }
        index
    }

    fn trivia_run_before(&self, index: usize) -> usize {
        let mut start = index;
        while start > 0 && self.tokens[start - 1].is_trivia() {
            start -= 1;
        }
        start
    }

    fn offset_at(&self, index: usize) -> usize {
        match self.tokens.get(index) {
            Some(token) => token.range.start_offset,
            None => self.text.len(),
        }
    }

    fn kinds(&self, start: usize, end: usize) -> Vec<LuaTokenKind> {
        self.tokens[start..end].iter().map(|t| t.kind).collect()
    }

    fn close_marker(&mut self, marker: &Marker) {
        debug_assert_eq!(
            self.open_markers.last(),
            Some(&marker.id()),
            "markers must be closed in LIFO order"
        );
        self.open_markers.retain(|id| *id != marker.id());
    }

    fn resolve_node(&self, marker: &Marker, kind: LuaSyntaxKind, collapsed: bool) -> LuaSyntaxNode {
        let core_start = marker.position().min(self.tokens.len());
        let core_end = self.consumed_end.max(core_start);

        let left_start = self.trivia_run_before(core_start);
        let left_run = self.kinds(left_start, core_start);
        let token_start = left_start + marker.left_binder().bind_left(&left_run);

        let right_end = if core_end > core_start {
            self.skip_trivia(core_end)
        } else {
            core_end
        };
        let right_run = self.kinds(core_end, right_end);
        let token_end = core_end + marker.right_binder().bind_right(&right_run);

        let start_offset = self.offset_at(token_start);
        let end_offset = if token_end > token_start {
            self.tokens[token_end - 1].range.end_offset()
        } else {
            start_offset
        };

        LuaSyntaxNode {
            kind,
            collapsed,
            token_start,
            token_end,
            range: SourceRange::from_offsets(start_offset, end_offset),
        }
    }
}

impl TokenCursor for LuaTokenCursor<'_> {
    fn current_token(&self) -> LuaTokenKind {
        match self.tokens.get(self.token_index) {
            Some(token) => token.kind,
            None => LuaTokenKind::TkEof,
        }
    }

    fn bump(&mut self) {
        if self.token_index >= self.tokens.len() {
            return;
        }
        self.consumed_end = self.token_index + 1;
        self.token_index = self.skip_trivia(self.token_index + 1);
    }

    fn is_eof(&self) -> bool {
        self.token_index >= self.tokens.len()
    }

    fn raw_lookup(&self, offset: isize) -> Option<LuaTokenKind> {
        let index = self.token_index.checked_add_signed(offset)?;
        self.tokens.get(index).map(|token| token.kind)
    }

    fn latest_done_kind(&self) -> Option<LuaSyntaxKind> {
        self.nodes.last().map(|node| node.kind)
    }

    fn position(&self) -> usize {
        self.token_index
    }

    fn mark(&mut self) -> Marker {
        let id = self.next_marker_id;
        self.next_marker_id = self.next_marker_id.wrapping_add(1);
        self.open_markers.push(id);
        Marker::new(id, self.token_index, self.consumed_end, self.nodes.len())
    }

    fn rollback_marker(&mut self, marker: Marker) {
        self.close_marker(&marker);
        self.token_index = marker.position();
        self.consumed_end = marker.consumed_end();
        self.nodes.truncate(marker.node_count());
    }

    fn drop_marker(&mut self, marker: Marker) {
        self.close_marker(&marker);
    }

    fn done_marker(&mut self, marker: Marker, kind: LuaSyntaxKind, collapsed: bool) {
        self.close_marker(&marker);
        let node = self.resolve_node(&marker, kind, collapsed);
        log::trace!(
            "{} node [{}, {}) over tokens [{}, {})",
            kind,
            node.range.start_offset,
            node.range.end_offset(),
            node.token_start,
            node.token_end
        );
        if collapsed {
            // a collapsed node hides everything finished inside it
            self.nodes.truncate(marker.node_count());
        }
        self.nodes.push(node);
    }
}
