use crate::syntax::text_range::SourceRange;

const EOF_CHAR: char = '\0';

/// Char cursor over source text, tracking byte offsets for the token being read.
pub struct Reader<'a> {
    text: &'a str,
    // byte offset of the current char
    offset: usize,
    // byte offset where the current token started
    buff_start: usize,
    current: char,
}

impl<'a> Reader<'a> {
    pub fn new(text: &'a str) -> Self {
        Reader {
            text,
            offset: 0,
            buff_start: 0,
            current: text.chars().next().unwrap_or(EOF_CHAR),
        }
    }

    pub fn bump(&mut self) {
        if self.is_eof() {
            return;
        }
        self.offset += self.current.len_utf8();
        self.current = self.text[self.offset..].chars().next().unwrap_or(EOF_CHAR);
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.text.len()
    }

    pub fn is_start_of_line(&self) -> bool {
        self.offset == 0 || matches!(self.text.as_bytes()[self.offset - 1], b'\n' | b'\r')
    }

    pub fn current_char(&self) -> char {
        if self.is_eof() {
            EOF_CHAR
        } else {
            self.current
        }
    }

    pub fn next_char(&self) -> char {
        if self.is_eof() {
            return EOF_CHAR;
        }
        let next = self.offset + self.current.len_utf8();
        self.text[next..].chars().next().unwrap_or(EOF_CHAR)
    }

    pub fn reset_buff(&mut self) {
        self.buff_start = self.offset;
    }

    pub fn current_range(&self) -> SourceRange {
        SourceRange::from_offsets(self.buff_start, self.offset)
    }

    pub fn current_text(&self) -> &'a str {
        &self.text[self.buff_start..self.offset]
    }

    pub fn eat_while<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut count = 0;
        while !self.is_eof() && pred(self.current_char()) {
            self.bump();
            count += 1;
        }
        count
    }

    pub fn eat_when(&mut self, ch: char) -> usize {
        self.eat_while(|c| c == ch)
    }
}
