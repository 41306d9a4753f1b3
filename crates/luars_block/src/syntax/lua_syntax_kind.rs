use core::fmt;

/// Kinds of structural nodes a marker can be collapsed or completed into.
///
/// The matcher itself only ever emits `Block`; the rest are completed by
/// host grammar rules driving the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LuaSyntaxKind {
    Block,
    CallArgs,
    NameExpr,
    Stat,
}

impl fmt::Display for LuaSyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LuaSyntaxKind::Block => "block",
            LuaSyntaxKind::CallArgs => "call args",
            LuaSyntaxKind::NameExpr => "name",
            LuaSyntaxKind::Stat => "statement",
        };
        f.write_str(name)
    }
}
