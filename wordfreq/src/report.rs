use std::{
    cmp::Reverse,
    io::{self, Write},
};

use itertools::Itertools;
use log::info;

use crate::WordCount;

/// One line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub word: &'a [u8],
    pub count: usize,
}

impl RankedEntry<'_> {
    /// Writes `<count:>4> <word>\n`, the word bytes untouched.
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        write!(out, "{:>4} ", self.count)?;
        out.write_all(self.word)?;
        out.write_all(b"\n")
    }
}

/// Picks the `k` most frequent words, highest count first.
///
/// Equal counts are ordered by ascending word. A dictionary smaller than `k`
/// yields every entry.
pub fn top_k(counter: &WordCount, k: usize) -> Vec<RankedEntry<'_>> {
    let k = k.min(counter.len());
    if k == 0 {
        return Vec::new();
    }

    counter
        .iter()
        .map(|(word, &count)| (Reverse(count), word.as_slice()))
        .k_smallest(k)
        .map(|(Reverse(count), word)| RankedEntry { word, count })
        .collect()
}

pub fn print_top_k(mut out: impl Write, counter: &WordCount, k: usize) -> io::Result<()> {
    let entries = top_k(counter, k);
    info!(
        "reporting {} of {} distinct words",
        entries.len(),
        counter.len()
    );
    for entry in &entries {
        entry.write_to(&mut out)?;
    }
    Ok(())
}
