use std::array;

use crate::errors::{RouterError, RouterResult};
use crate::method::{HttpMethod, METHOD_COUNT};
use crate::params::Params;
use crate::pattern::{parse_grpc_pattern, parse_pattern};
use crate::router::{PatternDialect, RouteMatch, RouterOptions};
use crate::trie::Tree;

/// The configuration-phase router: a single-writer value that accumulates
/// routes for nine per-method trees. `seal` consumes it and compiles the
/// tries; there is no way to register against a sealed router.
#[derive(Debug)]
pub struct Router<H> {
    options: RouterOptions,
    trees: [Tree<H>; METHOD_COUNT],
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self::with_options(RouterOptions::default())
    }

    pub fn with_options(options: RouterOptions) -> Self {
        let support_verb = options.dialect == PatternDialect::Grpc;
        Self {
            options,
            trees: array::from_fn(|_| Tree::new(support_verb)),
        }
    }

    /// Registers `pattern` for a method given by its canonical upper-case
    /// name. All registration errors are fatal to the configuration phase;
    /// a partially built trie has no defined semantics.
    pub fn api(&mut self, method: &str, pattern: &str, handler: H) -> RouterResult<()> {
        let method = HttpMethod::from_name(method).ok_or_else(|| RouterError::UnknownMethod {
            method: method.to_string(),
        })?;
        self.add(method, pattern, handler)
    }

    pub fn add(&mut self, method: HttpMethod, pattern: &str, handler: H) -> RouterResult<()> {
        let dialect = self.options.dialect;
        let tree = &mut self.trees[method as usize];
        let parsed = match dialect {
            PatternDialect::Colon => parse_pattern(pattern, &mut tree.regexps)?,
            PatternDialect::Grpc => parse_grpc_pattern(pattern, &mut tree.regexps)?,
        };
        tree.add(parsed, handler);
        Ok(())
    }

    pub fn get(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Get, pattern, handler)
    }

    pub fn post(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Post, pattern, handler)
    }

    pub fn put(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Put, pattern, handler)
    }

    pub fn delete(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Delete, pattern, handler)
    }

    pub fn patch(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Patch, pattern, handler)
    }

    pub fn head(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Head, pattern, handler)
    }

    pub fn options(&mut self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add(HttpMethod::Options, pattern, handler)
    }

    /// Registers the same pattern and handler for both GET and POST.
    pub fn get_post(&mut self, pattern: &str, handler: H) -> RouterResult<()>
    where
        H: Clone,
    {
        self.add(HttpMethod::Get, pattern, handler.clone())?;
        self.add(HttpMethod::Post, pattern, handler)
    }

    /// Compiles all nine tries and freezes the router. The returned value
    /// is immutable; concurrent readers need no locks.
    pub fn seal(self) -> RouterReadOnly<H> {
        let mut trees = self.trees;
        for (tree, method) in trees.iter_mut().zip(HttpMethod::ALL) {
            tree.build();
            if !tree.is_empty() {
                tracing::event!(
                    tracing::Level::DEBUG,
                    operation = "seal",
                    method = method.as_str(),
                    parametric_routes = tree.route_count() as u64,
                    static_routes = tree.static_count() as u64,
                );
            }
        }
        RouterReadOnly { trees }
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// The query-phase router: nine compiled tries behind a read-only surface.
#[derive(Debug)]
pub struct RouterReadOnly<H> {
    trees: [Tree<H>; METHOD_COUNT],
}

impl<H> RouterReadOnly<H> {
    /// Looks up `path` for `method`: static-map probe first, trie walk
    /// for parametric routes second. Absence of a match is a result, not
    /// an error.
    #[tracing::instrument(level = "trace", skip(self, path), fields(method = ?method, path = %path))]
    pub fn find<'t, 'p>(&'t self, method: HttpMethod, path: &'p str) -> RouteMatch<'t, 'p, H> {
        let tree = &self.trees[method as usize];
        if let Some(handler) = tree.static_match(path) {
            return RouteMatch::Static { handler };
        }
        let mut params = Params::new();
        match tree.pattern_match(path, &mut params) {
            Some(handler) => RouteMatch::Parametric { handler, params },
            None => RouteMatch::None,
        }
    }

    /// Like `find`, with the method given by name. `None` means the
    /// method itself is unknown, which hosts usually report differently
    /// from an unmatched path.
    pub fn find_named<'t, 'p>(
        &'t self,
        method: &str,
        path: &'p str,
    ) -> Option<RouteMatch<'t, 'p, H>> {
        HttpMethod::from_name(method).map(|method| self.find(method, path))
    }
}
