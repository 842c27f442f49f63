/// Iterator over the byte offsets of every occurrence of a fixed pattern.
///
/// The scan resumes one byte past each hit rather than past the whole
/// pattern, so occurrences overlapping a previous match are still reported.
/// Offsets come out strictly increasing; an empty or pattern-free buffer
/// yields nothing.
#[derive(Debug, Clone)]
pub struct SignatureIter<'a> {
    haystack: &'a [u8],
    pattern: &'a [u8],
    pos: usize,
}

impl<'a> SignatureIter<'a> {
    pub fn new(haystack: &'a [u8], pattern: &'a [u8]) -> Self {
        Self {
            haystack,
            pattern,
            pos: 0,
        }
    }
}

impl Iterator for SignatureIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pattern.is_empty() {
            return None;
        }
        let found = self.haystack[self.pos..]
            .windows(self.pattern.len())
            .position(|window| window == self.pattern)?;
        let offset = self.pos + found;
        self.pos = offset + 1;
        Some(offset)
    }
}
