/// Cursor over SNBT text. The text is immutable; only the index moves.
///
/// Offsets handed out are relative to the caller's original input, which
/// may have had leading whitespace trimmed before we saw it.
pub(crate) struct SliceInput<'de> {
    data: &'de str,
    index: usize,
    base: usize,
}

impl<'de> SliceInput<'de> {
    pub fn new(data: &'de str, base: usize) -> Self {
        Self {
            data,
            index: 0,
            base,
        }
    }

    pub fn offset(&self) -> usize {
        self.base + self.index
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += c.len_utf8();
        Some(c)
    }

    /// Skip the character we just peeked.
    pub fn discard(&mut self) {
        self.next();
    }

    pub fn discard_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.discard();
        }
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'de str {
        &self.data[self.index..]
    }

    /// Consume `token` if the input starts with it, ignoring ASCII case.
    pub fn eat_ignore_case(&mut self, token: &str) -> bool {
        match self.rest().get(..token.len()) {
            Some(head) if head.eq_ignore_ascii_case(token) => {
                self.index += token.len();
                true
            }
            _ => false,
        }
    }

    /// Advance while `keep` holds, returning the text passed over.
    pub fn take_while(&mut self, mut keep: impl FnMut(char) -> bool) -> &'de str {
        let start = self.index;
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            self.discard();
        }
        &self.data[start..self.index]
    }
}
