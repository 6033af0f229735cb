use memchr::memchr;

use super::tree::{CODE_OFFSET, END_CODE, ROOT_STATE, Tree, code};
use crate::params::Params;
use crate::pattern::split_verb;

// Fallback target recorded when a segment start has a '*' sibling. The
// deepest one recorded before the walk fails wins.
struct WildcardMark {
    state: u32,
    begin: usize,
    pcount: usize,
}

impl<H> Tree<H> {
    /// Walks the trie byte by byte. Literal transitions are tried first
    /// within a segment; a failure falls back to the segment's `:` state,
    /// then (after the whole walk fails) to the deepest recorded `*`.
    /// Capture offsets are recorded into `params` as the walk goes.
    pub(crate) fn pattern_match<'t, 'p>(
        &'t self,
        full_path: &'p str,
        params: &mut Params<'t, 'p>,
    ) -> Option<&'t H> {
        // Capture offsets are 16-bit; longer paths never match.
        if self.routes.is_empty() || full_path.len() > i16::MAX as usize {
            return None;
        }

        let (path, verb) = if self.support_verb {
            split_verb(full_path)
        } else {
            (full_path, "")
        };
        let bytes = path.as_bytes();

        let mut state = ROOT_STATE;
        let mut last_star: Option<WildcardMark> = None;
        let mut pcount = 0usize;
        let mut dead_end = false;

        let mut i = 0;
        'segments: while i < bytes.len() {
            // every segment opens with '/', in the path and in the trie
            if bytes[i] != b'/' {
                dead_end = true;
                break;
            }
            let Some(slash_state) = self.transition(state, code(b'/')) else {
                dead_end = true;
                break;
            };
            state = slash_state;
            i += 1;
            let begin = i;

            if let Some(star_state) = self.transition(slash_state, code(b'*')) {
                last_star = Some(WildcardMark {
                    state: star_state,
                    begin,
                    pcount,
                });
            }

            while i < bytes.len() && bytes[i] != b'/' {
                if let Some(next) = self.transition(state, code(bytes[i])) {
                    state = next;
                    i += 1;
                    continue;
                }

                // literal matching failed mid-segment: named parameter
                let Some(param_state) = self.transition(slash_state, code(b':')) else {
                    dead_end = true;
                    break 'segments;
                };
                state = param_state;

                i = memchr(b'/', &bytes[i..]).map_or(bytes.len(), |m| i + m);

                // most methods carry no regex constraints at all
                if !self.regexps.is_empty() {
                    state = self.regex_transition(state, &path[begin..i]);
                }

                params.set(pcount, begin, i);
                pcount += 1;
                continue 'segments;
            }
        }

        if dead_end {
            let mark = last_star?;
            pcount = mark.pcount;
            params.set(pcount, mark.begin, path.len());
            pcount += 1;
            state = mark.state;
        }

        // a split-off verb is matched as plain literal transitions
        if !verb.is_empty() {
            for &b in verb.as_bytes() {
                state = self.transition(state, code(b))?;
            }
        }

        let end = self.transition(state, END_CODE)?;
        let encoded = self.base[end as usize];
        if encoded >= 0 {
            return None;
        }
        let route = &self.routes[(-encoded - 1) as usize];
        debug_assert_eq!(route.pattern.fields.len(), pcount);
        params.finish(path, &route.pattern.fields);
        Some(&route.handler)
    }

    // A ':' state may refine through '=' into one regex-index state per
    // interned expression. The first expression in table order that
    // accepts the segment wins; with no acceptance the parameter stays
    // unconstrained.
    fn regex_transition(&self, state: u32, segment: &str) -> u32 {
        let Some(eq_state) = self.transition(state, code(b'=')) else {
            return state;
        };
        for (index, re) in self.regexps.iter().enumerate() {
            let t = self.base[eq_state as usize] + index as i32 + CODE_OFFSET;
            if t as usize >= self.check.len() {
                break;
            }
            if self.check[t as usize] == eq_state && re.is_match(segment) {
                return t as u32;
            }
        }
        state
    }
}
