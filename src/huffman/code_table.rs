use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;

use crate::huffman::frequencies::FrequencyList;
use crate::{Code, Symbol};

/// The code of every symbol of an input.
///
/// Codes are kept in ascending order of symbol, which is also the order in which they are
/// stored in a `.hff` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the code of `symbol`, returning the one it replaces.
    pub fn insert(&mut self, symbol: Symbol, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + Clone + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// The symbols having a code, in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.codes.keys().copied()
    }

    /// The codes, in ascending order of their symbol.
    pub fn codes(&self) -> impl Iterator<Item = &Code> + '_ {
        self.codes.values()
    }

    /// Builds the table mapping each code back to its symbol.
    pub fn reverse(&self) -> ReverseCodeTable {
        ReverseCodeTable {
            symbols: self
                .codes
                .iter()
                .map(|(symbol, code)| (code.clone(), *symbol))
                .collect(),
        }
    }

    /// Checks that no code is a prefix of another one.
    ///
    /// In lexicographic order a code is followed by the codes it is a prefix of, so comparing
    /// neighbours is enough. Duplicated and empty codes count as violations.
    pub fn is_prefix_free(&self) -> bool {
        if self.codes.values().any(|code| code.is_empty()) {
            return false;
        }

        self.codes
            .values()
            .sorted()
            .tuple_windows()
            .all(|(shorter, longer)| !longer.starts_with(shorter.as_bitslice()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// The mean number of bits spent per input byte when encoding the input `freqs` counts.
    pub fn average_code_len(&self, freqs: &FrequencyList) -> f64 {
        let total = freqs.total_freq();
        if total == 0 {
            return 0.0;
        }

        let bits: usize = freqs
            .entries()
            .iter()
            .filter_map(|entry| self.get(entry.symbol).map(|code| code.len() * entry.freq))
            .sum();
        bits as f64 / total as f64
    }
}

impl From<BTreeMap<Symbol, Code>> for CodeTable {
    fn from(codes: BTreeMap<Symbol, Code>) -> Self {
        Self { codes }
    }
}

impl FromIterator<(Symbol, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Maps every code of a [`CodeTable`] back to its symbol.
#[derive(Clone, Debug, Default)]
pub struct ReverseCodeTable {
    symbols: HashMap<Code, Symbol>,
}

impl ReverseCodeTable {
    pub fn get(&self, code: &Code) -> Option<Symbol> {
        self.symbols.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
