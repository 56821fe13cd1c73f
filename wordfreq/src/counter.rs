use std::{
    collections::{hash_map, HashMap},
    io::{self, Read},
};

/// Case-folded word to occurrence count.
///
/// Keys are raw bytes: input that is not valid UTF-8 is counted as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCount {
    data: HashMap<Vec<u8>, usize>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `token` and bumps its count by one.
    pub fn add(&mut self, token: &[u8]) {
        if let Some(count) = self.data.get_mut(token) {
            // already lowercase, skip the allocation
            *count += 1;
            return;
        }
        *self.data.entry(fold(token)).or_insert(0) += 1;
    }

    pub fn get(&self, word: impl AsRef<[u8]>) -> Option<usize> {
        self.data.get(word.as_ref()).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens seen so far.
    pub fn total(&self) -> usize {
        self.data.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Vec<u8>, usize> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a WordCount {
    type Item = (&'a Vec<u8>, &'a usize);
    type IntoIter = hash_map::Iter<'a, Vec<u8>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Whitespace as the C locale's `isspace` sees it, which unlike
/// `u8::is_ascii_whitespace` includes the vertical tab.
pub fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// ASCII-lowercases every byte of `token`; everything else passes through.
pub fn fold(token: &[u8]) -> Vec<u8> {
    token.to_ascii_lowercase()
}

/// Tallies every whitespace-delimited token of `reader` into `counter`.
///
/// Counts accumulate, so one map can be fed several streams in turn.
/// Returns how many tokens were read from this stream.
pub fn count_words(mut reader: impl Read, counter: &mut WordCount) -> io::Result<usize> {
    let mut contents = Vec::new();
    reader.read_to_end(&mut contents)?;

    let mut tokens = 0;
    for token in contents
        .split(|&b| is_separator(b))
        .filter(|t| !t.is_empty())
    {
        counter.add(token);
        tokens += 1;
    }
    Ok(tokens)
}
