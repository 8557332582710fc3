//! Small predicates over a decoded [`Marker`] tree (spec.md §4.8,
//! "Helpers"): comparing a leaf's underlying bytes against a literal, and
//! recognizing a subscription-confirmation reply.
//!
//! These never allocate and never extract a full [`crate::protocol::Value`]
//! tree — both walk the marker directly against the buffer it was parsed
//! from, the same way [`crate::protocol::Extractor`] does.

use crate::protocol::marker::Marker;

/// Compares the bytes a leaf marker points at against `literal`.
///
/// Mirrors the equality visitor a marker-based client traditionally ships:
/// every leaf variant (including `Nil`, whose range is the count field's
/// own text) compares its underlying range; an `Array` never matches a
/// literal, since an array has no single byte range of its own.
pub fn marker_equals(input: &[u8], marker: &Marker, literal: &[u8]) -> bool {
    match marker.leaf_range() {
        Some((from, to)) => &input[from..to] == literal,
        None => false,
    }
}

/// The four command names a subscribe confirmation's first element can be.
const SUBSCRIBE_KINDS: [&[u8]; 4] = [b"subscribe", b"psubscribe", b"unsubscribe", b"punsubscribe"];

/// Recognizes a subscription-confirmation reply: a 3-element array whose
/// first element is one of `subscribe`/`psubscribe`/`unsubscribe`/
/// `punsubscribe`, second element is the channel (or pattern) name, and
/// third element is the subscriber's current subscription count.
///
/// Returns the matched kind and channel range on success.
pub fn match_subscribe_confirmation<'a>(
    input: &'a [u8],
    marker: &Marker,
) -> Option<(&'a [u8], &'a [u8])> {
    let Marker::Array(elements) = marker else {
        return None;
    };
    let [kind, channel, count] = elements.as_slice() else {
        return None;
    };

    let (kind_from, kind_to) = kind.leaf_range()?;
    let kind_bytes = &input[kind_from..kind_to];
    if !SUBSCRIBE_KINDS.contains(&kind_bytes) {
        return None;
    }

    let (channel_from, channel_to) = channel.leaf_range()?;
    if !matches!(count, Marker::Int { .. }) {
        return None;
    }

    Some((kind_bytes, &input[channel_from..channel_to]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_matches_simple_string_payload() {
        let input = b"+OK\r\n";
        let marker = Marker::String { from: 1, to: 3 };
        assert!(marker_equals(input, &marker, b"OK"));
        assert!(!marker_equals(input, &marker, b"NOPE"));
    }

    #[test]
    fn equals_never_matches_arrays() {
        let marker = Marker::Array(vec![]);
        assert!(!marker_equals(b"", &marker, b""));
    }

    #[test]
    fn recognizes_subscribe_confirmation() {
        let input = b"*3\r\n$9\r\nsubscribe\r\n$4\r\nnews\r\n:1\r\n";
        let marker = Marker::Array(vec![
            Marker::String { from: 9, to: 18 },
            Marker::String { from: 24, to: 28 },
            Marker::Int { from: 31, to: 32 },
        ]);
        let (kind, channel) = match_subscribe_confirmation(input, &marker).unwrap();
        assert_eq!(kind, b"subscribe");
        assert_eq!(channel, b"news");
    }

    #[test]
    fn rejects_non_subscribe_arrays() {
        let input = b"*2\r\n:1\r\n:2\r\n";
        let marker = Marker::Array(vec![
            Marker::Int { from: 5, to: 6 },
            Marker::Int { from: 9, to: 10 },
        ]);
        assert!(match_subscribe_confirmation(input, &marker).is_none());
    }

    #[test]
    fn rejects_unrecognized_command_name() {
        let input = b"*3\r\n+ping\r\n$4\r\nnews\r\n:1\r\n";
        let marker = Marker::Array(vec![
            Marker::String { from: 5, to: 9 },
            Marker::String { from: 15, to: 19 },
            Marker::Int { from: 22, to: 23 },
        ]);
        assert!(match_subscribe_confirmation(input, &marker).is_none());
    }
}
