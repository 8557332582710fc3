//! The wire protocol: grammar primitives, the streaming parser, the
//! borrowed marker tree and owned value tree, the match condition, the
//! command model, and the serializer.

pub mod command;
pub mod grammar;
pub mod marker;
pub mod matcher;
pub mod parser;
pub mod serializer;
pub mod value;

pub use command::{Command, CommandSequence, SingleCommand};
pub use marker::{DropResult, KeepResult, Marker, ResultPolicy};
pub use matcher::MatchCondition;
pub use parser::{parse, Outcome, ParserConfig};
pub use serializer::serialize;
pub use value::{Extractor, Value};
