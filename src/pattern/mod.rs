mod error;
mod grpc;
mod parser;
mod types;

pub use error::{PatternError, PatternResult};
pub use grpc::{parse_grpc_pattern, split_verb};
pub use parser::parse_pattern;
pub use types::Pattern;
