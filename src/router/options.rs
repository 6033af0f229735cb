use serde::{Deserialize, Serialize};

/// Pattern syntax accepted at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PatternDialect {
    /// `/users/:id`, `/users/:id=^\d+$`, `/files/*rest`.
    #[default]
    Colon,
    /// `/v1/{name}`, `/v1/{id=^\d+$}`, `/v1/{path=**}`, trailing `:verb`.
    Grpc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RouterOptions {
    pub dialect: PatternDialect,
}
