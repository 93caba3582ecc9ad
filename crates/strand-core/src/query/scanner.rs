//! Zero-copy cursor over a normalized query

/// Cursor used by rules to match fixed phrases followed by small captures.
///
/// Input is expected to be lowercased already; matching is literal.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Scanner positioned at byte offset `position`.
    fn at(input: &'a str, position: usize) -> Self {
        Self { input, position }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    /// Consume `literal` if the input continues with it.
    pub fn eat(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    /// Consume a run of ASCII digits and parse it. `None` when there are no
    /// digits; values beyond `i64::MAX` saturate.
    pub fn digits(&mut self) -> Option<i64> {
        let run = self
            .remaining()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if run == 0 {
            return None;
        }
        let text = &self.remaining()[..run];
        let value = text.parse().unwrap_or(i64::MAX);
        self.advance(run);
        Some(value)
    }

    /// Consume one ASCII alphanumeric character.
    pub fn alphanumeric(&mut self) -> Option<char> {
        let c = self.peek_char().filter(char::is_ascii_alphanumeric)?;
        self.advance(c.len_utf8());
        Some(c)
    }

    /// Scanners positioned just after each occurrence of `phrase`, leftmost first.
    pub fn after_each(input: &'a str, phrase: &'a str) -> impl Iterator<Item = Scanner<'a>> + 'a {
        input
            .match_indices(phrase)
            .map(move |(offset, m)| Scanner::at(input, offset + m.len()))
    }
}
