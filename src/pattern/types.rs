use smallvec::SmallVec;

pub(crate) type FieldList = SmallVec<[Box<str>; 4]>;

/// A parsed path pattern.
///
/// `key` is the byte sequence used as the trie key: literal bytes are kept
/// verbatim, a named parameter collapses to `:`, a regex constraint appends
/// `=` plus the one-byte index of the compiled expression in the method's
/// shared table, and a wildcard collapses to `*`. Two patterns that differ
/// only in field names therefore share a key.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) key: Vec<u8>,
    pub(crate) fields: FieldList,
    pub(crate) verb: Option<Box<str>>,
    pub(crate) source: Box<str>,
}

impl Pattern {
    /// The trie key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Number of parameter fields bound by this pattern.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The i-th field name in pattern order.
    pub fn field(&self, i: usize) -> Option<&str> {
        self.fields.get(i).map(|f| f.as_ref())
    }

    /// The trailing `:verb` suffix, including the colon, if any.
    pub fn verb(&self) -> Option<&str> {
        self.verb.as_deref()
    }

    /// The original pattern string, kept for diagnostics.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// A pattern with no fields is matched through the static map.
    pub fn is_static(&self) -> bool {
        self.fields.is_empty()
    }
}
