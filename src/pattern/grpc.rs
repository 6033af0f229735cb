use memchr::memchr;
use regex::Regex;

use super::error::{PatternError, PatternResult};
use super::parser::intern_regex;
use super::types::{FieldList, Pattern};
use crate::params::MAX_PARAMS;

/// Splits `path` into `(segments, verb)`, where the verb is the longest
/// trailing suffix that begins with `:` and contains no `/`. The colon
/// stays with the verb. Returns an empty verb when there is none.
pub fn split_verb(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'/' => break,
            b':' => return (&path[..i], &path[i..]),
            _ => {}
        }
    }
    (path, "")
}

// Like split_verb, but a closing brace also ends the scan so that a colon
// inside a `{name=expr}` constraint is never mistaken for a verb.
fn split_pattern_verb(pattern: &str) -> (&str, &str) {
    let bytes = pattern.as_bytes();
    for i in (0..bytes.len()).rev() {
        match bytes[i] {
            b'/' | b'}' => break,
            b':' => return (&pattern[..i], &pattern[i..]),
            _ => {}
        }
    }
    (pattern, "")
}

/// Parses a gRPC-style pattern.
///
/// Segments take the form `{name}`, `{name=expr}`, `*`, `**`, `{name=**}`
/// or a literal; the pattern may end in a `:verb` suffix. The trie key
/// encoding is identical to the default dialect, with the verb bytes
/// appended verbatim.
pub fn parse_grpc_pattern(pattern: &str, regexps: &mut Vec<Regex>) -> PatternResult<Pattern> {
    if !pattern.starts_with('/') {
        return Err(PatternError::NoLeadingSlash {
            pattern: pattern.to_string(),
        });
    }

    let (body, verb) = split_pattern_verb(pattern);
    let bytes = body.as_bytes();

    let mut key = Vec::with_capacity(pattern.len());
    let mut fields = FieldList::new();

    let mut i = 0;
    while i < bytes.len() {
        debug_assert_eq!(bytes[i], b'/');
        key.push(b'/');
        i += 1;
        if i >= bytes.len() {
            break;
        }
        if bytes[i] == b'/' {
            return Err(PatternError::EmptySegment {
                pattern: pattern.to_string(),
            });
        }

        let seg_end = memchr(b'/', &bytes[i..]).map_or(bytes.len(), |m| i + m);
        let segment = &body[i..seg_end];
        let last = seg_end == bytes.len();

        match segment.as_bytes()[0] {
            b'{' => {
                let Some(inner) = segment[1..].strip_suffix('}') else {
                    return Err(PatternError::UnterminatedBrace {
                        pattern: pattern.to_string(),
                    });
                };
                match inner.split_once('=') {
                    None => {
                        key.push(b':');
                        fields.push(Box::from(inner));
                    }
                    Some((name, "**")) => {
                        if !last {
                            return Err(PatternError::WildcardNotLast {
                                pattern: pattern.to_string(),
                            });
                        }
                        key.push(b'*');
                        fields.push(Box::from(name));
                    }
                    Some((name, expr)) => {
                        key.push(b':');
                        fields.push(Box::from(name));
                        let index = intern_regex(pattern, expr, regexps)?;
                        key.push(b'=');
                        key.push(index);
                    }
                }
            }
            b'*' if segment == "**" => {
                if !last {
                    return Err(PatternError::WildcardNotLast {
                        pattern: pattern.to_string(),
                    });
                }
                key.push(b'*');
                fields.push(Box::from(""));
            }
            b'*' if segment == "*" => {
                key.push(b':');
                fields.push(Box::from(""));
            }
            _ => key.extend_from_slice(segment.as_bytes()),
        }

        i = seg_end;
    }

    if fields.len() > MAX_PARAMS {
        return Err(PatternError::TooManyParams {
            pattern: pattern.to_string(),
            count: fields.len(),
            max: MAX_PARAMS,
        });
    }

    let verb = if verb.is_empty() {
        None
    } else {
        key.extend_from_slice(verb.as_bytes());
        Some(Box::from(verb))
    };

    Ok(Pattern {
        key,
        fields,
        verb,
        source: Box::from(pattern),
    })
}
