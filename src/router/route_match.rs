use crate::params::Params;

/// Outcome of one lookup.
///
/// Handlers are borrowed from the router; `Params` additionally borrows
/// the caller's path. Whether `None` should become a 404 or a 405 is the
/// host's call (`HttpMethod::from_name` tells the two apart).
#[derive(Debug)]
pub enum RouteMatch<'t, 'p, H> {
    /// The path hit the static map; no parameters were captured.
    Static { handler: &'t H },
    /// The path matched a parametric route.
    Parametric {
        handler: &'t H,
        params: Params<'t, 'p>,
    },
    /// Nothing matched.
    None,
}

impl<'t, 'p, H> RouteMatch<'t, 'p, H> {
    pub fn handler(&self) -> Option<&'t H> {
        match self {
            RouteMatch::Static { handler } => Some(*handler),
            RouteMatch::Parametric { handler, .. } => Some(*handler),
            RouteMatch::None => None,
        }
    }

    pub fn params(&self) -> Option<&Params<'t, 'p>> {
        match self {
            RouteMatch::Parametric { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, RouteMatch::None)
    }
}
