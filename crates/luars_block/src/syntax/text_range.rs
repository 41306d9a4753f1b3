#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceRange {
    pub start_offset: usize,
    pub length: usize,
}

impl SourceRange {
    pub fn new(start_offset: usize, length: usize) -> SourceRange {
        SourceRange {
            start_offset,
            length,
        }
    }

    pub fn from_offsets(start_offset: usize, end_offset: usize) -> SourceRange {
        SourceRange {
            start_offset,
            length: end_offset.saturating_sub(start_offset),
        }
    }

    pub fn end_offset(&self) -> usize {
        self.start_offset + self.length
    }
}
