/// Number of distinct byte values a stream can contain.
pub const SYMBOL_COUNT: usize = 256;

/// Per-byte occurrence counts for one input stream.
///
/// Built once per compression call and immutable afterwards. The distinct
/// symbols are exactly the byte values present in the input; an empty input
/// yields an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    /// Counts every byte of `input`.
    #[must_use]
    pub fn scan(input: &[u8]) -> Self {
        let mut counts = [0u64; SYMBOL_COUNT];
        for &byte in input {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Occurrence count of one byte value.
    #[must_use]
    pub const fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Iterates the distinct symbols present, in ascending byte order,
    /// paired with their counts.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct byte values present.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }
}
