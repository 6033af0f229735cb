use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' does not begin with '/'")]
    NoLeadingSlash { pattern: String },
    #[error("pattern '{pattern}' contains an empty segment")]
    EmptySegment { pattern: String },
    #[error("pattern '{pattern}' has an empty regular expression")]
    EmptyRegex { pattern: String },
    #[error("pattern '{pattern}' has an invalid regular expression: {error}")]
    InvalidRegex { pattern: String, error: String },
    #[error("wildcard in pattern '{pattern}' must be the last segment")]
    WildcardNotLast { pattern: String },
    #[error("parameter segment '{{' in pattern '{pattern}' is not closed within its segment")]
    UnterminatedBrace { pattern: String },
    #[error("pattern '{pattern}' declares {count} parameters; at most {max} are supported")]
    TooManyParams {
        pattern: String,
        count: usize,
        max: usize,
    },
    #[error("pattern '{pattern}' needs more than {limit} distinct regular expressions in one method")]
    RegexLimitExceeded { pattern: String, limit: usize },
}

pub type PatternResult<T> = Result<T, PatternError>;
