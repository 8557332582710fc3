//! The match condition (spec.md §4.3): a predicate consumed by the stream
//! read loop that decides, after each physical read, whether enough replies
//! have arrived and where the next read should resume scanning from.
//!
//! `MatchCondition` is deliberately decoupled from I/O: it only ever sees
//! the bytes accumulated so far and answers `(new_begin, done)`. The read
//! loop itself lives in [`crate::conn`].

use crate::protocol::marker::DropResult;
use crate::protocol::parser::{parse, Outcome, ParserConfig};

/// Drives an `async_read`/`read` call that should complete once `expected`
/// complete replies have accumulated in the buffer.
///
/// Internally this always uses the drop-result policy: a match condition
/// only needs to know how many bytes each reply consumed, never its
/// content, so it never allocates a tree regardless of how many replies it
/// is asked to count past.
#[derive(Debug)]
pub struct MatchCondition {
    expected: usize,
    matched: usize,
    cfg: ParserConfig,
}

impl MatchCondition {
    /// Builds a condition that is satisfied once `expected` replies have
    /// been fully decoded from the front of the buffer.
    pub fn new(expected: usize, cfg: ParserConfig) -> Self {
        Self {
            expected,
            matched: 0,
            cfg,
        }
    }

    /// Re-scans `data[begin..]` for as many additional complete replies as
    /// are present, advancing past each one it can fully decode.
    ///
    /// Returns `(new_begin, done)`: `new_begin` is the offset (relative to
    /// the start of `data`) to resume scanning from on the next call —
    /// callers should still treat bytes before `new_begin` as preserved,
    /// not discarded, since an enclosing `Connection::read`/`async_read`
    /// decodes the same region again at the end (spec.md §4.7). `done` is
    /// `true` once `expected` replies have matched.
    ///
    /// A malformed reply in `data` is reported back to the caller as an
    /// error rather than folded into `(begin, true)`, so a desynchronized
    /// stream fails loudly instead of returning a truncated result set.
    pub fn feed(&mut self, data: &[u8], mut begin: usize) -> Result<(usize, bool), crate::error::ProtocolErrorKind> {
        while self.matched < self.expected {
            match parse::<DropResult>(&data[begin..], &self.cfg) {
                Outcome::Positive { consumed, .. } => {
                    begin += consumed;
                    self.matched += 1;
                }
                Outcome::NotEnoughData => break,
                Outcome::ProtocolError { kind } => return Err(kind),
            }
        }
        Ok((begin, self.matched >= self.expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_reply() {
        let mut cond = MatchCondition::new(1, ParserConfig::default());
        let (begin, done) = cond.feed(b"+OK\r\n", 0).unwrap();
        assert_eq!(begin, 5);
        assert!(done);
    }

    #[test]
    fn not_done_until_all_expected_replies_arrive() {
        let mut cond = MatchCondition::new(2, ParserConfig::default());
        let (begin, done) = cond.feed(b"+OK\r\n", 0).unwrap();
        assert_eq!(begin, 5);
        assert!(!done);
    }

    #[test]
    fn accumulates_across_multiple_feed_calls() {
        let mut cond = MatchCondition::new(2, ParserConfig::default());
        let (begin, done) = cond.feed(b"+OK\r\n", 0).unwrap();
        assert!(!done);
        let (begin, done) = cond.feed(b"+OK\r\n:1\r\n", begin).unwrap();
        assert_eq!(begin, 10);
        assert!(done);
    }

    #[test]
    fn stops_at_incomplete_trailing_reply() {
        let mut cond = MatchCondition::new(2, ParserConfig::default());
        let (begin, done) = cond.feed(b"+OK\r\n:1", 0).unwrap();
        assert_eq!(begin, 5);
        assert!(!done);
    }

    #[test]
    fn surfaces_protocol_errors() {
        let mut cond = MatchCondition::new(1, ParserConfig::default());
        let err = cond.feed(b"?nope\r\n", 0).unwrap_err();
        assert_eq!(err, crate::error::ProtocolErrorKind::WrongIntroduction);
    }

    #[test]
    fn zero_expected_is_immediately_done() {
        let mut cond = MatchCondition::new(0, ParserConfig::default());
        let (begin, done) = cond.feed(b"", 0).unwrap();
        assert_eq!(begin, 0);
        assert!(done);
    }
}
