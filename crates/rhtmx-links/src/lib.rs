//! # RHTMX Links
//!
//! Builds navigable links from a static table of named routes. Every link
//! has two paths:
//! - `as`: the public URL shown in the address bar (`pattern`)
//! - `href`: the internal page path used by the rendering layer (`page`)
//!
//! ## Route Patterns
//!
//! - Static text (`/about`)
//! - Required parameters (`/users/:id`, `/post-:slug`)
//! - Optional groups (`/docs{-:lang}?`) and the `:name?` shorthand
//!
//! Patterns are compiled once when the table is built. Resolving a link is a
//! pure function of the table and the request: no I/O, no shared mutable
//! state, safe to call from any number of threads.
//!
//! ## Query Strings
//!
//! Parameters that the `page` template does not consume are appended to
//! `href` as a query string, in insertion order. List values become a single
//! pair joined with an encoded `/`.
//!
//! ## Example
//!
//! ```
//! use rhtmx_links::{LinkParams, LinkRequest, RouteDefinition, RouteLinks};
//!
//! let links = RouteLinks::new(vec![
//!     RouteDefinition::new("index"),
//!     RouteDefinition::new("post")
//!         .with_pattern("/blog/:slug")
//!         .with_page("/post"),
//! ])
//! .unwrap();
//!
//! let link = links.link(&LinkRequest::new("index")).unwrap();
//! assert_eq!(link.as_path, "/");
//! assert_eq!(link.href, "/index");
//!
//! let link = links
//!     .link(&LinkRequest::new("post").param("slug", "hello").param("ref", "home"))
//!     .unwrap();
//! assert_eq!(link.as_path, "/blog/hello");
//! assert_eq!(link.href, "/post?slug=hello&ref=home");
//! ```

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub mod definition;
pub mod error;
pub mod manifest;
pub mod params;
pub mod path;
pub mod pattern;
pub mod query;

pub use definition::RouteDefinition;
pub use error::{ErrorKind, LinkError};
pub use manifest::RouteManifest;
pub use params::{LinkParams, ParamValue, Scalar};
pub use path::with_leading_slash;
pub use pattern::{compile_pattern, CompiledPattern, PatternError, PatternToken};

/// Route name whose public path is always `/`
pub const INDEX_ROUTE: &str = "index";

// ============================================================================
// Core Types
// ============================================================================

/// Arguments of a `link()` call
///
/// An empty `route` is a usage error reported by [`RouteLinks::link`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkRequest {
    #[serde(default)]
    pub route: String,

    #[serde(default)]
    pub params: LinkParams,
}

impl LinkRequest {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            params: LinkParams::new(),
        }
    }

    /// Adds a single parameter
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Replaces all parameters
    pub fn with_params(mut self, params: LinkParams) -> Self {
        self.params = params;
        self
    }
}

/// A resolved link: public path plus internal path
///
/// Serializes as `{ "as": ..., "href": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkDescriptor {
    /// Public path, exactly one leading `/`
    #[serde(rename = "as")]
    pub as_path: String,
    /// Internal path with the query string appended
    pub href: String,
}

impl fmt::Display for LinkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (as {})", self.href, self.as_path)
    }
}

/// A route with both templates compiled and defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoute {
    definition: RouteDefinition,
    pattern: CompiledPattern,
    page: CompiledPattern,
}

impl CompiledRoute {
    fn compile(definition: RouteDefinition) -> Result<Self, LinkError> {
        // The `/<name>` default is taken literally; only explicit templates are parsed
        let compile = |template: Option<&String>| match template {
            Some(source) => compile_pattern(source).map_err(|source_error| {
                LinkError::InvalidPattern {
                    route: definition.name.clone(),
                    pattern: source.clone(),
                    source: source_error,
                }
            }),
            None => Ok(CompiledPattern::literal(definition.default_path())),
        };

        let pattern = compile(definition.pattern.as_ref())?;
        let page = compile(definition.page.as_ref())?;

        Ok(Self {
            definition,
            pattern,
            page,
        })
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Definition as it was supplied, before defaulting
    pub fn definition(&self) -> &RouteDefinition {
        &self.definition
    }

    /// Compiled public template
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Compiled internal template
    pub fn page(&self) -> &CompiledPattern {
        &self.page
    }

    pub fn is_index(&self) -> bool {
        self.definition.name == INDEX_ROUTE
    }

    /// Resolves this route with the given parameters
    ///
    /// Only the parameters named by `page` are kept out of the query string;
    /// a parameter used by `pattern` alone still shows up in `href`.
    pub fn resolve(&self, params: &LinkParams) -> Result<LinkDescriptor, LinkError> {
        let name = self.name();

        let as_path = if self.is_index() {
            "/".to_string()
        } else {
            with_leading_slash(&self.pattern.render(name, params)?).into_owned()
        };

        let page_path = self.page.render(name, params)?;
        let consumed: HashSet<&str> = self.page.param_names().collect();
        let href = format!(
            "{}{}",
            with_leading_slash(&page_path),
            query::build_query(params, &consumed)
        );

        Ok(LinkDescriptor { as_path, href })
    }
}

// ============================================================================
// Route Table
// ============================================================================

/// Immutable table of named routes
///
/// Built once from an ordered list of definitions. Construction fails fast on
/// the first definition without a name, the first repeated name, or the
/// first template that does not compile.
///
/// # Examples
///
/// ```
/// use rhtmx_links::{LinkError, RouteDefinition, RouteLinks};
///
/// let result = RouteLinks::new(vec![
///     RouteDefinition::new("home"),
///     RouteDefinition::new("home"),
/// ]);
/// assert_eq!(
///     result.unwrap_err(),
///     LinkError::DuplicateRouteName("home".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteLinks {
    routes: IndexMap<String, CompiledRoute>,
}

impl RouteLinks {
    /// Validates and compiles a list of route definitions
    pub fn new<I>(definitions: I) -> Result<Self, LinkError>
    where
        I: IntoIterator<Item = RouteDefinition>,
    {
        let mut routes = IndexMap::new();

        for definition in definitions {
            if definition.name.is_empty() {
                return Err(LinkError::MissingRouteName);
            }
            if routes.contains_key(&definition.name) {
                return Err(LinkError::DuplicateRouteName(definition.name));
            }

            let route = CompiledRoute::compile(definition)?;
            routes.insert(route.name().to_string(), route);
        }

        debug!("Built route link table with {} routes", routes.len());

        Ok(Self { routes })
    }

    /// Resolves a link request into public and internal paths
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_links::{LinkRequest, RouteDefinition, RouteLinks};
    ///
    /// let links = RouteLinks::new(vec![RouteDefinition::new("a-route-name")
    ///     .with_pattern("/a-route-pattern-with-:lang")
    ///     .with_page("/a-route-page")])
    /// .unwrap();
    ///
    /// let link = links
    ///     .link(&LinkRequest::new("a-route-name").param("lang", "javascript"))
    ///     .unwrap();
    ///
    /// assert_eq!(link.as_path, "/a-route-pattern-with-javascript");
    /// assert_eq!(link.href, "/a-route-page?lang=javascript");
    /// ```
    pub fn link(&self, request: &LinkRequest) -> Result<LinkDescriptor, LinkError> {
        self.link_to(&request.route, &request.params)
    }

    /// Same as [`RouteLinks::link`] without building a [`LinkRequest`]
    pub fn link_to(&self, route: &str, params: &LinkParams) -> Result<LinkDescriptor, LinkError> {
        if route.is_empty() {
            return Err(LinkError::MissingLinkRoute);
        }

        let compiled = self
            .routes
            .get(route)
            .ok_or_else(|| LinkError::RouteNotFound(route.to_string()))?;

        let descriptor = compiled.resolve(params)?;
        trace!(route, href = %descriptor.href, as_path = %descriptor.as_path, "Resolved link");

        Ok(descriptor)
    }

    pub fn route(&self, name: &str) -> Option<&CompiledRoute> {
        self.routes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Compiled routes in definition order
    pub fn routes(&self) -> impl Iterator<Item = &CompiledRoute> {
        self.routes.values()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl TryFrom<Vec<RouteDefinition>> for RouteLinks {
    type Error = LinkError;

    fn try_from(definitions: Vec<RouteDefinition>) -> Result<Self, Self::Error> {
        Self::new(definitions)
    }
}
