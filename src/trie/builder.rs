use std::collections::VecDeque;

use super::tree::{END_CODE, MIN_BASE, ROOT_STATE, Tree, code};

const GROW_FACTOR: f64 = 1.5;
const OCCUPANCY_THRESHOLD: f64 = 0.95;

#[derive(Debug, Clone, Copy)]
struct ChildNode {
    code: i32,
    depth: usize,
    begin: usize,
    end: usize,
}

#[derive(Debug)]
struct SiblingGroup {
    state: u32,
    childs: Vec<ChildNode>,
}

impl SiblingGroup {
    // children are emitted in ascending code order
    fn span(&self) -> (i32, i32) {
        match (self.childs.first(), self.childs.last()) {
            (Some(first), Some(last)) => (first.code, last.code - first.code + 1),
            _ => (0, 0),
        }
    }
}

impl<H> Tree<H> {
    /// One-shot build of the double-array layout. Sorts and de-duplicates
    /// the accumulated routes, then places sibling groups breadth-first
    /// into a shared offset window. After this returns the arrays are
    /// final and the tree is read-only.
    pub(crate) fn build(&mut self) {
        self.rearrange();
        self.grow((self.routes.len() + 1) * 2);
        if self.routes.is_empty() {
            return;
        }

        let mut queue = VecDeque::new();
        queue.push_back(self.child_group(ROOT_STATE, 0, 0, self.routes.len()));

        let mut next_check_pos = MIN_BASE;
        while let Some(group) = queue.pop_front() {
            let (base, pos) = self.find_base(&group, next_check_pos);
            next_check_pos = pos;
            self.base[group.state as usize] = base;

            for child in &group.childs {
                let state = (base + child.code) as u32;
                self.check[state as usize] = group.state;

                if child.code == END_CODE {
                    // accepting state: the route index, offset by one
                    self.base[state as usize] = -(child.begin as i32 + 1);
                } else {
                    queue.push_back(self.child_group(state, child.depth, child.begin, child.end));
                }
            }
        }
    }

    // Sort by key bytes, drop consecutive duplicate keys. The sort is
    // stable, so of two patterns with the same key the one registered
    // first survives.
    fn rearrange(&mut self) {
        self.routes.sort_by(|a, b| a.pattern.key.cmp(&b.pattern.key));
        self.routes.dedup_by(|a, b| a.pattern.key == b.pattern.key);
    }

    fn grow(&mut self, needed: usize) {
        let size = (self.base.len() as f64 * GROW_FACTOR) as usize + needed;
        self.base.resize(size, 0);
        self.check.resize(size, 0);
    }

    // Scans for the lowest admissible base offset for a sibling group: one
    // where every child's slot is still free. Tracks the first free slot
    // seen as the next scan's starting point, and skips the whole window
    // once it is nearly full.
    fn find_base(&mut self, group: &SiblingGroup, check_pos: i32) -> (i32, i32) {
        let (min_code, span) = group.span();
        let mut next_check_pos = check_pos;
        let mut pos = (min_code + MIN_BASE).max(next_check_pos);

        let mut non_zero = 0usize;
        let mut first_free = true;
        let base = 'scan: loop {
            if (pos + span) as usize > self.base.len() {
                self.grow((pos + span) as usize - self.base.len());
            }

            if self.check[pos as usize] != 0 {
                non_zero += 1;
                pos += 1;
                continue;
            }
            if first_free {
                next_check_pos = pos;
                first_free = false;
            }

            let candidate = pos - min_code;
            for child in &group.childs {
                if self.check[(candidate + child.code) as usize] != 0 {
                    pos += 1;
                    continue 'scan;
                }
            }
            break candidate;
        };

        if non_zero as f64 / (pos - next_check_pos + 1) as f64 >= OCCUPANCY_THRESHOLD {
            next_check_pos = pos;
        }

        (base, next_check_pos)
    }

    // Siblings at `depth` are the runs of sorted routes in [begin, end)
    // that agree on the key byte at `depth`. A route whose key ends here
    // contributes the end-code child, always first because the sort put
    // the shorter key ahead of its extensions.
    fn child_group(&self, state: u32, depth: usize, begin: usize, end: usize) -> SiblingGroup {
        let mut childs = Vec::new();

        let mut i = begin;
        if i < end && self.routes[i].pattern.key.len() == depth {
            childs.push(ChildNode {
                code: END_CODE,
                depth: depth + 1,
                begin: i,
                end: i + 1,
            });
            i += 1;
        }

        let mut curr_code = -1;
        let mut curr_begin = i;
        for j in i..end {
            let c = code(self.routes[j].pattern.key[depth]);
            if c != curr_code {
                if curr_code != -1 {
                    childs.push(ChildNode {
                        code: curr_code,
                        depth: depth + 1,
                        begin: curr_begin,
                        end: j,
                    });
                }
                curr_code = c;
                curr_begin = j;
            }
        }
        if curr_code != -1 {
            childs.push(ChildNode {
                code: curr_code,
                depth: depth + 1,
                begin: curr_begin,
                end,
            });
        }

        SiblingGroup { state, childs }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tree::{END_CODE, ROOT_STATE, Tree, code};
    use crate::pattern::parse_pattern;

    fn build_tree(patterns: &[&str]) -> Tree<usize> {
        let mut tree = Tree::new(false);
        for (i, p) in patterns.iter().enumerate() {
            let parsed = parse_pattern(p, &mut tree.regexps).expect("pattern should parse");
            tree.add(parsed, i);
        }
        tree.build();
        tree
    }

    #[test]
    fn every_key_resolves_to_its_route() {
        let tree = build_tree(&[
            "/a/:x",
            "/a/:x/b",
            "/c/*rest",
            "/d/:id=^\\d+$/e",
            "/files/:name/raw",
        ]);
        for (index, route) in tree.routes.iter().enumerate() {
            let mut state = ROOT_STATE;
            for &b in route.pattern.key() {
                state = tree
                    .transition(state, code(b))
                    .expect("key byte should transition");
            }
            let end = tree
                .transition(state, END_CODE)
                .expect("accepting state should exist");
            assert!(tree.base[end as usize] < 0);
            assert_eq!((-tree.base[end as usize] - 1) as usize, index);
        }
    }

    #[test]
    fn occupied_slots_belong_to_exactly_one_parent_and_code() {
        let tree = build_tree(&["/users/:id", "/users/:id/posts", "/teams/:id", "/about"]);
        for t in 0..tree.check.len() {
            let parent = tree.check[t];
            if parent == 0 {
                continue;
            }
            let c = t as i32 - tree.base[parent as usize];
            assert!(
                (0..=256).contains(&c),
                "slot {t} is not addressable from its parent {parent}"
            );
        }
    }

    #[test]
    fn duplicate_keys_keep_the_first_registration() {
        let tree = build_tree(&["/a/:x", "/a/:y"]);
        assert_eq!(tree.routes.len(), 1);
        assert_eq!(tree.routes[0].pattern.field(0), Some("x"));
        assert_eq!(tree.routes[0].handler, 0);
    }

    #[test]
    fn empty_tree_builds_and_matches_nothing() {
        let tree = build_tree(&[]);
        let mut params = crate::params::Params::new();
        assert!(tree.pattern_match("/anything", &mut params).is_none());
    }
}
