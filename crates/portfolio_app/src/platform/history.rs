use url::Url;

/// In-memory stand-in for the browser's session history.
///
/// `push` drops any forward entries, like `history.pushState` after going
/// back. `back`/`forward` move the cursor and return the location the
/// page should re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<Url>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Url {
        &self.entries[self.cursor]
    }

    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url);
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<Url> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current().clone())
    }

    pub fn forward(&mut self) -> Option<Url> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
