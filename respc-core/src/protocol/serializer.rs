//! Command serialization (spec.md §4.6): writes the `*N\r\n$len\r\narg\r\n...`
//! wire format for a [`Command`] into a caller-supplied [`DynamicBuffer`].
//!
//! The exact output length is computed before any byte is written, so
//! `prepare` is called exactly once per command and never under-sized.

use crate::buffer::DynamicBuffer;
use crate::protocol::command::{Command, SingleCommand};

/// Appends the wire representation of `command` to `buffer`.
pub fn serialize(buffer: &mut impl DynamicBuffer, command: &Command) {
    match command {
        Command::Single(single) => serialize_single(buffer, single),
        Command::Sequence(sequence) => {
            for single in sequence.commands() {
                serialize_single(buffer, single);
            }
        }
    }
}

fn serialize_single(buffer: &mut impl DynamicBuffer, command: &SingleCommand) {
    let len = encoded_len(command);
    let dst = buffer.prepare(len);

    let mut pos = 0;
    pos += write_header(&mut dst[pos..], b'*', command.arguments().len() as i64);
    for argument in command.arguments() {
        pos += write_header(&mut dst[pos..], b'$', argument.len() as i64);
        dst[pos..pos + argument.len()].copy_from_slice(argument);
        pos += argument.len();
        dst[pos..pos + 2].copy_from_slice(b"\r\n");
        pos += 2;
    }
    debug_assert_eq!(pos, len);

    buffer.commit(len);
}

/// Writes `<tag><count>\r\n` at the front of `dst`, returning the number of
/// bytes written.
fn write_header(dst: &mut [u8], tag: u8, count: i64) -> usize {
    dst[0] = tag;
    let digits = itoa(count, &mut dst[1..]);
    dst[1 + digits] = b'\r';
    dst[1 + digits + 1] = b'\n';
    1 + digits + 2
}

/// Writes the ASCII-decimal digits of `value` (which is always `>= 0` for
/// the counts this serializer emits) into `dst`, returning the digit count.
fn itoa(value: i64, dst: &mut [u8]) -> usize {
    let text = value.to_string();
    dst[..text.len()].copy_from_slice(text.as_bytes());
    text.len()
}

/// Exact byte length of `command`'s serialized form, so `prepare` is
/// called with the precise size and never re-sized mid-write.
fn encoded_len(command: &SingleCommand) -> usize {
    let mut len = header_len(b'*', command.arguments().len() as i64);
    for argument in command.arguments() {
        len += header_len(b'$', argument.len() as i64);
        len += argument.len() + 2;
    }
    len
}

fn header_len(_tag: u8, count: i64) -> usize {
    1 + digit_count(count) + 2
}

fn digit_count(value: i64) -> usize {
    value.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::GrowableBuffer;

    #[test]
    fn serializes_single_command() {
        let command: Command = SingleCommand::new(["SET", "k", "v"]).unwrap().into();
        let mut buffer = GrowableBuffer::with_capacity(64);
        serialize(&mut buffer, &command);
        assert_eq!(
            buffer.data(),
            b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n".as_slice()
        );
    }

    #[test]
    fn serializes_sequence_as_consecutive_arrays() {
        let mut sequence = crate::protocol::command::CommandSequence::new();
        sequence.push(SingleCommand::new(["PING"]).unwrap());
        sequence.push(SingleCommand::new(["PING"]).unwrap());
        let command: Command = sequence.into();

        let mut buffer = GrowableBuffer::with_capacity(64);
        serialize(&mut buffer, &command);
        assert_eq!(
            buffer.data(),
            b"*1\r\n$4\r\nPING\r\n*1\r\n$4\r\nPING\r\n".as_slice()
        );
    }

    #[test]
    fn serializes_binary_safe_arguments() {
        let command: Command = SingleCommand::new([b"SET".to_vec(), b"k".to_vec(), vec![0, 1, 2, 255]])
            .unwrap()
            .into();
        let mut buffer = GrowableBuffer::with_capacity(64);
        serialize(&mut buffer, &command);
        assert_eq!(
            buffer.data(),
            b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$4\r\n\x00\x01\x02\xff\r\n".as_slice()
        );
    }

    #[test]
    fn round_trips_through_parser() {
        use crate::protocol::marker::KeepResult;
        use crate::protocol::parser::{parse, Outcome, ParserConfig};

        let command: Command = SingleCommand::new(["GET", "key"]).unwrap().into();
        let mut buffer = GrowableBuffer::with_capacity(64);
        serialize(&mut buffer, &command);

        match parse::<KeepResult>(buffer.data(), &ParserConfig::default()) {
            Outcome::Positive { result, consumed } => {
                assert_eq!(consumed, buffer.data().len());
                assert_eq!(result.array_len(), Some(2));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
