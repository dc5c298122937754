//! Sliding window over an input buffer.
//!
//! The window splits the input at a cursor into a search buffer (up to
//! `window_size` bytes already seen) and a look-ahead buffer (up to
//! `lookahead_size` bytes still to encode).

use super::Match;

/// Cursor over an input buffer with bounded search and look-ahead regions.
#[derive(Debug, Clone)]
pub struct SlidingWindow<'a> {
    data: &'a [u8],
    window_size: usize,
    lookahead_size: usize,
    position: usize,
}

impl<'a> SlidingWindow<'a> {
    /// Create a window positioned at the start of `data`.
    pub fn new(data: &'a [u8], window_size: usize, lookahead_size: usize) -> Self {
        Self {
            data,
            window_size,
            lookahead_size,
            position: 0,
        }
    }

    /// The whole input buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Maximum back-reference distance.
    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Maximum match length.
    #[inline]
    pub fn lookahead_size(&self) -> usize {
        self.lookahead_size
    }

    /// Check if bytes remain at or after the cursor.
    #[inline]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move the cursor forward, stopping at the end of the buffer.
    pub fn advance(&mut self, shift: usize) {
        self.position = self.position.saturating_add(shift).min(self.data.len());
    }

    /// Bytes a back-reference from the cursor may point into.
    pub fn search_buffer(&self) -> &'a [u8] {
        let start = self.position.saturating_sub(self.window_size);
        &self.data[start..self.position]
    }

    /// Bytes a match starting at the cursor may cover.
    pub fn lookahead_buffer(&self) -> &'a [u8] {
        let end = self.position.saturating_add(self.lookahead_size).min(self.data.len());
        &self.data[self.position..end]
    }

    /// Byte at the cursor.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Byte `distance` positions after the cursor, if inside the buffer.
    #[inline]
    pub fn peek(&self, distance: usize) -> Option<u8> {
        self.data.get(self.position.checked_add(distance)?).copied()
    }

    /// Longest match for the cursor using a full scan of the search buffer.
    pub fn longest_match(&self) -> Match {
        find_longest_match(self.data, self.position, self.window_size, self.lookahead_size)
    }
}

/// Length of the common prefix of `data[pos..]` and `data[pos - offset..]`,
/// stopping at `limit` bytes.
///
/// The source run may overlap the bytes being compared, which is what lets
/// a short period describe a long run.
#[inline]
pub(crate) fn common_prefix_len(data: &[u8], pos: usize, offset: usize, limit: usize) -> usize {
    let source = pos - offset;
    let mut length = 0;
    while length < limit && data[pos + length] == data[source + length] {
        length += 1;
    }
    length
}

/// Find the longest earlier occurrence of the bytes at `pos`.
///
/// Offsets `1..=min(window_size, pos)` are tried in ascending order and the
/// best match is replaced only by a strictly longer one, so among equally
/// long matches the nearest wins. Returns [`Match::NONE`] when nothing of
/// length at least one exists.
pub fn find_longest_match(
    data: &[u8],
    pos: usize,
    window_size: usize,
    lookahead_size: usize,
) -> Match {
    if pos >= data.len() {
        return Match::NONE;
    }

    let limit = lookahead_size.min(data.len() - pos);
    let mut best = Match::NONE;

    for offset in 1..=window_size.min(pos) {
        let length = common_prefix_len(data, pos, offset, limit);
        if length > best.length {
            best = Match { offset, length };
            if length == limit {
                break;
            }
        }
    }

    best
}
