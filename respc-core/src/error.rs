use thiserror::Error;

/// The protocol-error kinds the parser itself can produce (spec.md §7).
///
/// These never carry an I/O source: a `ProtocolErrorKind` means the byte
/// stream was syntactically out of sync, not that reading/writing it failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolErrorKind {
    /// First byte of a reply is not one of `+ - : $ *`.
    #[error("wrong introduction byte")]
    WrongIntroduction,

    /// A count field (after `$` or `*`) is not a well-formed signed decimal.
    #[error("count field is not a valid decimal integer")]
    CountConversion,

    /// A decoded count is `< -1`, or exceeds the configured address-space cap.
    #[error("count value is out of the acceptable range")]
    CountRange,

    /// A bulk string's declared payload is not followed by CRLF.
    #[error("bulk string payload is not followed by CRLF")]
    BulkTerminator,
}

/// Top-level error type surfaced by [`crate::conn::Connection`].
///
/// Mirrors the teacher's `HdbError`: a `thiserror`-derived enum with one
/// variant per failure category, `#[from]` used where the source error
/// can be wrapped without loss of information.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RespError {
    /// The peer sent bytes that are not a valid prefix of the wire grammar.
    #[error("protocol error: {0}")]
    Protocol(ProtocolErrorKind),

    /// An `Int` reply's raw digit range did not parse as a signed 64-bit
    /// integer; only the extractor (never the parser) can produce this.
    #[error("integer reply payload is not a valid i64")]
    IntConversion,

    /// The command under construction would have been empty.
    #[error("a command requires at least one argument")]
    EmptyCommand,

    /// Error occurred in communication with the peer.
    #[error(transparent)]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Abbreviation of `Result<T, RespError>`.
pub type RespResult<T> = std::result::Result<T, RespError>;

impl From<ProtocolErrorKind> for RespError {
    fn from(kind: ProtocolErrorKind) -> Self {
        Self::Protocol(kind)
    }
}

impl RespError {
    /// Returns the contained [`ProtocolErrorKind`], if this is a protocol error.
    pub fn protocol_kind(&self) -> Option<ProtocolErrorKind> {
        match self {
            Self::Protocol(kind) => Some(*kind),
            _ => None,
        }
    }
}
