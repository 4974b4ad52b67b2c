/// Error types for route link generation
///
/// Every failure is returned synchronously to the caller. Nothing is logged
/// here: the embedding application decides what the user sees.
use thiserror::Error;

use crate::pattern::PatternError;

/// Broad category of a [`LinkError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The route manifest is invalid; raised while building [`crate::RouteLinks`]
    Configuration,
    /// `link()` was called incorrectly
    Usage,
    /// The requested route is not part of the manifest
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("A route name must be defined")]
    MissingRouteName,

    #[error("This route name is already defined: {0}")]
    DuplicateRouteName(String),

    #[error("Invalid pattern `{pattern}` for route \"{route}\": {source}")]
    InvalidPattern {
        route: String,
        pattern: String,
        #[source]
        source: PatternError,
    },

    #[error("Function link() should have a route name")]
    MissingLinkRoute,

    #[error("Route \"{route}\" expects a value for parameter \"{param}\"")]
    MissingParameter { route: String, param: String },

    #[error("Route name \"{0}\" is not defined in your route definitions")]
    RouteNotFound(String),
}

impl LinkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinkError::MissingRouteName
            | LinkError::DuplicateRouteName(_)
            | LinkError::InvalidPattern { .. } => ErrorKind::Configuration,
            LinkError::MissingLinkRoute | LinkError::MissingParameter { .. } => ErrorKind::Usage,
            LinkError::RouteNotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }

    pub fn is_usage(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
