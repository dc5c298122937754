//! Match finder implementations.
//!
//! [`LinearMatchFinder`] tries every offset in the window. [`HashChainMatchFinder`]
//! only visits earlier positions that start with the same byte, nearest
//! first, which yields exactly the same matches with far fewer comparisons
//! on typical input.

use super::window::{common_prefix_len, find_longest_match};
use super::{Match, MatchFinder};
use crate::config::MatchStrategy;

/// Marks the end of a chain.
const NIL: usize = usize::MAX;

/// Full scan of the search window for every query.
#[derive(Debug, Clone)]
pub struct LinearMatchFinder {
    window_size: usize,
    lookahead_size: usize,
}

impl LinearMatchFinder {
    pub fn new(window_size: usize, lookahead_size: usize) -> Self {
        Self {
            window_size,
            lookahead_size,
        }
    }
}

impl MatchFinder for LinearMatchFinder {
    fn find_match(&mut self, data: &[u8], pos: usize) -> Match {
        find_longest_match(data, pos, self.window_size, self.lookahead_size)
    }

    fn reset(&mut self) {}
}

/// Chains every position to the previous position holding the same byte.
///
/// Positions are indexed lazily up to the queried cursor, so the encoder may
/// skip over matched runs freely. One finder serves one buffer at a time;
/// call [`MatchFinder::reset`] before switching buffers. Querying a position
/// behind the last one re-indexes from the start.
#[derive(Debug, Clone)]
pub struct HashChainMatchFinder {
    window_size: usize,
    lookahead_size: usize,
    /// Most recent indexed position for each byte value.
    head: [usize; 256],
    /// For each indexed position, the previous position with the same byte.
    prev: Vec<usize>,
    /// Positions `0..indexed` have been linked into the chains.
    indexed: usize,
}

impl HashChainMatchFinder {
    pub fn new(window_size: usize, lookahead_size: usize) -> Self {
        Self {
            window_size,
            lookahead_size,
            head: [NIL; 256],
            prev: Vec::new(),
            indexed: 0,
        }
    }

    fn index_up_to(&mut self, data: &[u8], pos: usize) {
        if pos < self.indexed {
            self.reset();
        }
        if self.prev.len() < pos {
            self.prev.resize(pos, NIL);
        }
        for p in self.indexed..pos {
            let slot = &mut self.head[data[p] as usize];
            self.prev[p] = *slot;
            *slot = p;
        }
        self.indexed = pos;
    }
}

impl MatchFinder for HashChainMatchFinder {
    fn find_match(&mut self, data: &[u8], pos: usize) -> Match {
        if pos >= data.len() {
            return Match::NONE;
        }
        self.index_up_to(data, pos);

        let limit = self.lookahead_size.min(data.len() - pos);
        let mut best = Match::NONE;
        let mut candidate = self.head[data[pos] as usize];

        while candidate != NIL {
            let offset = pos - candidate;
            if offset > self.window_size {
                break;
            }
            let length = common_prefix_len(data, pos, offset, limit);
            if length > best.length {
                best = Match { offset, length };
                if length == limit {
                    break;
                }
            }
            candidate = self.prev[candidate];
        }

        best
    }

    fn reset(&mut self) {
        self.head = [NIL; 256];
        self.prev.clear();
        self.indexed = 0;
    }
}

/// Build the match finder for a strategy.
pub fn create_match_finder(
    strategy: MatchStrategy,
    window_size: usize,
    lookahead_size: usize,
) -> Box<dyn MatchFinder> {
    match strategy {
        MatchStrategy::Linear => Box::new(LinearMatchFinder::new(window_size, lookahead_size)),
        MatchStrategy::HashChain => {
            Box::new(HashChainMatchFinder::new(window_size, lookahead_size))
        }
    }
}
