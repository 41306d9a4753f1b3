use crate::syntax::LuaTokenKind;

/// Decides which trivia at a node edge belongs to the node.
///
/// A binder looks at the run of trivia tokens adjacent to one edge and returns
/// the index in that run where the edge is placed. On the left edge, tokens
/// `run[index..]` end up inside the node; on the right edge, `run[..index]`
/// do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriviaBinder {
    /// Trivia stays outside the node on either edge.
    #[default]
    Default,
    /// The node swallows the whole run.
    Greedy,
    /// Left edge only: leading comments go into the node, bare whitespace
    /// does not. Acts as `Default` on the right edge.
    LeadingComments,
}

impl TriviaBinder {
    pub fn bind_left(&self, run: &[LuaTokenKind]) -> usize {
        match self {
            TriviaBinder::Default => run.len(),
            TriviaBinder::Greedy => 0,
            TriviaBinder::LeadingComments => bind_leading_comments(run),
        }
    }

    pub fn bind_right(&self, run: &[LuaTokenKind]) -> usize {
        match self {
            TriviaBinder::Greedy => run.len(),
            TriviaBinder::Default | TriviaBinder::LeadingComments => 0,
        }
    }
}

fn bind_leading_comments(run: &[LuaTokenKind]) -> usize {
    let mut edge = run.len();
    for (i, kind) in run.iter().enumerate().rev() {
        if kind.is_comment() {
            edge = i;
        } else if !kind.is_whitespace() {
            break;
        }
    }
    edge
}
