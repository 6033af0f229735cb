pub mod errors;
pub mod method;
pub mod params;
pub mod pattern;
pub mod router;
pub mod trie;

pub use errors::{RouterError, RouterResult};
pub use method::HttpMethod;
pub use params::Params;
pub use pattern::{Pattern, PatternError};
pub use router::{PatternDialect, RouteMatch, Router, RouterOptions, RouterReadOnly};
