mod options;
mod route_match;
mod service;

pub use options::{PatternDialect, RouterOptions};
pub use route_match::RouteMatch;
pub use service::{Router, RouterReadOnly};
