/// Upper bound on captured parameters per route.
pub const MAX_PARAMS: usize = 20;

const INDEX_SLOTS: usize = MAX_PARAMS * 2;

/// Path parameters extracted by a successful match.
///
/// `Params` borrows the matched path from the caller and the parameter
/// names from the matched route; both borrows end with the query.
/// Captures are stored as byte-offset pairs into the path, in the order
/// they were matched (left to right).
#[derive(Debug, Clone)]
pub struct Params<'t, 'p> {
    pub(crate) path: &'p str,
    pub(crate) indices: [i16; INDEX_SLOTS],
    pub(crate) names: &'t [Box<str>],
}

impl<'t, 'p> Params<'t, 'p> {
    pub(crate) fn new() -> Self {
        Self {
            path: "",
            indices: [0; INDEX_SLOTS],
            names: &[],
        }
    }

    pub(crate) fn set(&mut self, slot: usize, begin: usize, end: usize) {
        debug_assert!(slot < MAX_PARAMS);
        let i = slot * 2;
        self.indices[i] = begin as i16;
        self.indices[i + 1] = end as i16;
    }

    pub(crate) fn finish(&mut self, path: &'p str, names: &'t [Box<str>]) {
        self.path = path;
        self.names = names;
    }

    /// Number of captured parameters.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the i-th parameter. Anonymous parameters have an empty name.
    pub fn name(&self, i: usize) -> Option<&'t str> {
        self.names.get(i).map(|n| n.as_ref())
    }

    /// Value of the i-th parameter as a slice of the matched path.
    pub fn value(&self, i: usize) -> Option<&'p str> {
        if i >= self.names.len() {
            return None;
        }
        let j = i * 2;
        Some(&self.path[self.indices[j] as usize..self.indices[j + 1] as usize])
    }

    /// Value of the first parameter with the given name, or `""`.
    pub fn by_name(&self, name: &str) -> &'p str {
        for (i, n) in self.names.iter().enumerate() {
            if n.as_ref() == name {
                return self.value(i).unwrap_or("");
            }
        }
        ""
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'t str, &'p str)> + '_ {
        (0..self.count()).map(|i| (self.names[i].as_ref(), self.value(i).unwrap_or("")))
    }
}

impl<'t, 'p> Default for Params<'t, 'p> {
    fn default() -> Self {
        Self::new()
    }
}
