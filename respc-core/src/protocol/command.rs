//! The write-only command model (spec.md §4.6).
//!
//! Commands are never parsed, only built and serialized: a [`SingleCommand`]
//! is a non-empty argument vector, a [`CommandSequence`] is a flat list of
//! commands to be pipelined in one write, and [`Command`] is the union
//! passed to [`crate::protocol::serializer::serialize`].

use crate::error::RespError;

/// One command: its name plus arguments, as a flat, non-empty list of
/// byte-string arguments. Construction validates non-emptiness up front so
/// a later serialize call can never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCommand {
    arguments: Vec<Vec<u8>>,
}

impl SingleCommand {
    /// Builds a command from `arguments`. Fails with
    /// [`RespError::EmptyCommand`] if `arguments` is empty — the wire
    /// grammar has no representation for a command with zero arguments.
    pub fn new<I, A>(arguments: I) -> Result<Self, RespError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Vec<u8>>,
    {
        let arguments: Vec<Vec<u8>> = arguments.into_iter().map(Into::into).collect();
        if arguments.is_empty() {
            return Err(RespError::EmptyCommand);
        }
        Ok(Self { arguments })
    }

    pub fn arguments(&self) -> &[Vec<u8>] {
        &self.arguments
    }
}

/// A flat (non-nested) sequence of commands to be pipelined in a single
/// write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSequence {
    commands: Vec<SingleCommand>,
}

impl CommandSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: SingleCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[SingleCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<SingleCommand> for CommandSequence {
    fn from_iter<I: IntoIterator<Item = SingleCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

/// Either a single command or a flat sequence of them; what
/// [`crate::protocol::serializer::serialize`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Single(SingleCommand),
    Sequence(CommandSequence),
}

impl From<SingleCommand> for Command {
    fn from(command: SingleCommand) -> Self {
        Self::Single(command)
    }
}

impl From<CommandSequence> for Command {
    fn from(sequence: CommandSequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl Command {
    /// Number of replies this command will elicit: one per element of a
    /// sequence, or one for a single command.
    pub fn expected_replies(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Sequence(sequence) => sequence.len(),
        }
    }
}
