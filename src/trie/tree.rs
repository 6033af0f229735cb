use hashbrown::HashMap as FastHashMap;
use regex::Regex;

use crate::pattern::Pattern;

// State 0 cannot be a parent, so the root is state 1.
pub(crate) const ROOT_STATE: u32 = 1;
pub(crate) const MIN_BASE: i32 = ROOT_STATE as i32 + 1;
// Reserved code marking the end of a key at an accepting state.
pub(crate) const END_CODE: i32 = 0;
pub(crate) const CODE_OFFSET: i32 = END_CODE + 1;

// Fast-reject bitmap for the static map, keyed by path length.
pub(crate) const STATIC_LENGTH_LIMIT: usize = 2048;

#[inline]
pub(crate) fn code(c: u8) -> i32 {
    c as i32 + CODE_OFFSET
}

#[derive(Debug)]
pub(crate) struct Route<H> {
    pub(crate) pattern: Pattern,
    pub(crate) handler: H,
}

/// Per-method double-array trie over parametric route keys, with a side
/// map for fully-static patterns.
///
/// A transition on byte `c` from state `s` leads to `base[s] + code(c)`
/// iff that index is in bounds and its `check` entry equals `s`. A state
/// `e` with `base[e] < 0` is accepting and encodes the route index as
/// `-(base[e]) - 1`.
#[derive(Debug)]
pub struct Tree<H> {
    pub(crate) base: Vec<i32>,
    pub(crate) check: Vec<u32>,
    pub(crate) routes: Vec<Route<H>>,
    pub(crate) regexps: Vec<Regex>,
    pub(crate) statics: FastHashMap<Box<str>, H>,
    pub(crate) can_be_static: Box<[bool; STATIC_LENGTH_LIMIT]>,
    pub(crate) support_verb: bool,
}

impl<H> Tree<H> {
    pub(crate) fn new(support_verb: bool) -> Self {
        Self {
            base: Vec::new(),
            check: Vec::new(),
            routes: Vec::new(),
            regexps: Vec::new(),
            statics: FastHashMap::new(),
            can_be_static: Box::new([false; STATIC_LENGTH_LIMIT]),
            support_verb,
        }
    }

    /// Registers a parsed pattern. Static patterns go to the hash map
    /// (last registration wins); parametric ones queue for the build.
    pub(crate) fn add(&mut self, pattern: Pattern, handler: H) {
        if pattern.is_static() {
            let source = pattern.source();
            if let Some(flag) = self.can_be_static.get_mut(source.len()) {
                *flag = true;
            }
            self.statics.insert(Box::from(source), handler);
        } else {
            self.routes.push(Route { pattern, handler });
        }
    }

    pub(crate) fn static_match(&self, path: &str) -> Option<&H> {
        // Lengths beyond the bitmap are not tracked; probe the map directly.
        let probe = self
            .can_be_static
            .get(path.len())
            .copied()
            .unwrap_or(!self.statics.is_empty());
        if probe { self.statics.get(path) } else { None }
    }

    pub(crate) fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub(crate) fn static_count(&self) -> usize {
        self.statics.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.statics.is_empty()
    }

    #[inline]
    pub(crate) fn transition(&self, state: u32, c: i32) -> Option<u32> {
        let t = self.base[state as usize] + c;
        if t >= 0 && (t as usize) < self.check.len() && self.check[t as usize] == state {
            Some(t as u32)
        } else {
            None
        }
    }
}
