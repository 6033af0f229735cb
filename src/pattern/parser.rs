use memchr::memchr;
use regex::Regex;

use super::error::{PatternError, PatternResult};
use super::types::{FieldList, Pattern};
use crate::params::MAX_PARAMS;

/// Regex indices are embedded in trie keys as a single byte.
pub(super) const REGEX_LIMIT: usize = 256;

/// Parses a default-dialect pattern.
///
/// Grammar:
///
/// ```text
/// Pattern   = "/" Segments
/// Segments  = Segment { "/" Segment }
/// Segment   = LITERAL | ":" [FieldPath ["=" Regexp]] | "*" [FieldPath]
/// FieldPath = IDENT { "." IDENT }
/// ```
///
/// `:` and `*` are special only at the start of a segment; anywhere else
/// they are literal bytes. Regular expressions are interned in `regexps`,
/// the table shared by all patterns of one method.
pub fn parse_pattern(pattern: &str, regexps: &mut Vec<Regex>) -> PatternResult<Pattern> {
    let bytes = pattern.as_bytes();
    if bytes.first() != Some(&b'/') {
        return Err(PatternError::NoLeadingSlash {
            pattern: pattern.to_string(),
        });
    }

    let mut key = Vec::with_capacity(bytes.len());
    let mut fields = FieldList::new();

    let mut i = 0;
    while i < bytes.len() {
        debug_assert_eq!(bytes[i], b'/');
        key.push(b'/');
        i += 1;
        if i >= bytes.len() {
            break; // trailing slash: an empty final segment is its own pattern
        }

        let seg_end = memchr(b'/', &bytes[i..]).map_or(bytes.len(), |m| i + m);
        match bytes[i] {
            b'/' => {
                return Err(PatternError::EmptySegment {
                    pattern: pattern.to_string(),
                });
            }
            b':' => {
                key.push(b':');
                let name_and_re = &pattern[i + 1..seg_end];
                match name_and_re.split_once('=') {
                    None => fields.push(Box::from(name_and_re)),
                    Some((name, expr)) => {
                        fields.push(Box::from(name));
                        let index = intern_regex(pattern, expr, regexps)?;
                        key.push(b'=');
                        key.push(index);
                    }
                }
                i = seg_end;
            }
            b'*' => {
                if seg_end < bytes.len() {
                    return Err(PatternError::WildcardNotLast {
                        pattern: pattern.to_string(),
                    });
                }
                key.push(b'*');
                fields.push(Box::from(&pattern[i + 1..]));
                i = bytes.len();
            }
            _ => {
                key.extend_from_slice(&bytes[i..seg_end]);
                i = seg_end;
            }
        }
    }

    if fields.len() > MAX_PARAMS {
        return Err(PatternError::TooManyParams {
            pattern: pattern.to_string(),
            count: fields.len(),
            max: MAX_PARAMS,
        });
    }

    Ok(Pattern {
        key,
        fields,
        verb: None,
        source: Box::from(pattern),
    })
}

/// Returns the index of `expr` in the method's regex table, compiling and
/// appending it on first sight. Expressions are compared by source string,
/// so pattern registration order fixes the table order.
pub(super) fn intern_regex(
    pattern: &str,
    expr: &str,
    regexps: &mut Vec<Regex>,
) -> PatternResult<u8> {
    if expr.is_empty() {
        return Err(PatternError::EmptyRegex {
            pattern: pattern.to_string(),
        });
    }

    if let Some(index) = regexps.iter().position(|re| re.as_str() == expr) {
        return Ok(index as u8);
    }

    if regexps.len() >= REGEX_LIMIT {
        return Err(PatternError::RegexLimitExceeded {
            pattern: pattern.to_string(),
            limit: REGEX_LIMIT,
        });
    }
    let re = Regex::new(expr).map_err(|err| PatternError::InvalidRegex {
        pattern: pattern.to_string(),
        error: err.to_string(),
    })?;
    regexps.push(re);
    Ok((regexps.len() - 1) as u8)
}
