use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{Freq, Symbol, MAX_SYMBOLS};

/// A symbol together with the number of times it occurs in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub symbol: Symbol,
    pub freq: Freq,
}

impl FrequencyEntry {
    pub fn new(symbol: Symbol, freq: Freq) -> Self {
        Self { symbol, freq }
    }
}

impl Display for FrequencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol.is_ascii_graphic() || self.symbol == b' ' {
            write!(f, "{{'{}': {}}}", self.symbol as char, self.freq)
        } else {
            write!(f, "{{{:#04x}: {}}}", self.symbol, self.freq)
        }
    }
}

/// The frequencies of the symbols of an input, sorted in ascending order of frequency.
///
/// Entries with the same frequency keep their relative order, so the list, and the tree built
/// from it, only depends on the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyList {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyList {
    /// Counts the occurrences of every byte in `data`.
    ///
    /// Symbols enter the list in order of first appearance and are then sorted by frequency.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0 as Freq; MAX_SYMBOLS];
        let mut first_seen = Vec::with_capacity(MAX_SYMBOLS);

        for &byte in data {
            if counts[byte as usize] == 0 {
                first_seen.push(byte);
            }
            counts[byte as usize] += 1;
        }

        let mut list = Self {
            entries: first_seen
                .into_iter()
                .map(|symbol| FrequencyEntry::new(symbol, counts[symbol as usize]))
                .collect(),
        };
        list.sort();
        list
    }

    /// Records one more occurrence of `symbol`, keeping the list sorted.
    pub fn push_symbol(&mut self, symbol: Symbol) {
        match self.entries.iter().position(|entry| entry.symbol == symbol) {
            Some(mut index) => {
                self.entries[index].freq += 1;
                // only the entries sharing the old frequency can now be smaller
                while index + 1 < self.entries.len()
                    && self.entries[index + 1].freq < self.entries[index].freq
                {
                    self.entries.swap(index, index + 1);
                    index += 1;
                }
            }
            None => {
                let index = self.entries.partition_point(|entry| entry.freq <= 1);
                self.entries.insert(index, FrequencyEntry::new(symbol, 1));
            }
        }
    }

    /// Stable insertion sort by ascending frequency. The alphabet holds at most
    /// [`MAX_SYMBOLS`] entries, so the quadratic bound doesn't matter.
    fn sort(&mut self) {
        for index in 1..self.entries.len() {
            let cursor = self.entries[index];
            let mut pos = index;

            while pos > 0 && self.entries[pos - 1].freq > cursor.freq {
                self.entries[pos] = self.entries[pos - 1];
                pos -= 1;
            }
            self.entries[pos] = cursor;
        }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The frequency of `symbol`, if it occurred at all.
    pub fn freq(&self, symbol: Symbol) -> Option<Freq> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.freq)
    }

    /// The sum of all the frequencies, i.e. the length of the counted input.
    pub fn total_freq(&self) -> Freq {
        self.entries.iter().map(|entry| entry.freq).sum()
    }

    /// The symbols, from the least to the most frequent.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|entry| entry.symbol)
    }

    /// Checks that the entries are in ascending order of frequency.
    pub fn is_sorted(&self) -> bool {
        self.entries
            .iter()
            .tuple_windows()
            .all(|(prev, next)| prev.freq <= next.freq)
    }
}

impl Extend<Symbol> for FrequencyList {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, iter: I) {
        for symbol in iter {
            self.push_symbol(symbol);
        }
    }
}

impl Display for FrequencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.entries.iter().join(", "))
    }
}
