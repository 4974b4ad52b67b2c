/// Route definitions as written in a route manifest
use serde::{Deserialize, Serialize};

/// A named destination
///
/// - `name`: unique identifier used by `link()`
/// - `pattern`: public path template, defaults to `/<name>`
/// - `page`: internal path used by the rendering layer, defaults to `/<name>`
///
/// A definition without a name deserializes fine and is rejected when the
/// route table is built.
///
/// # Examples
///
/// ```
/// use rhtmx_links::RouteDefinition;
///
/// let route = RouteDefinition::new("blog.post")
///     .with_pattern("/blog/:slug")
///     .with_page("/post");
///
/// assert_eq!(route.effective_pattern(), "/blog/:slug");
/// assert_eq!(route.effective_page(), "/post");
///
/// let route = RouteDefinition::new("about");
/// assert_eq!(route.effective_pattern(), "/about");
/// assert_eq!(route.effective_page(), "/about");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl RouteDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: None,
            page: None,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// `/<name>`, used verbatim when `pattern` or `page` is absent
    pub fn default_path(&self) -> String {
        format!("/{}", self.name)
    }

    /// Public path template after defaulting
    pub fn effective_pattern(&self) -> String {
        self.pattern.clone().unwrap_or_else(|| self.default_path())
    }

    /// Internal path after defaulting
    pub fn effective_page(&self) -> String {
        self.page.clone().unwrap_or_else(|| self.default_path())
    }
}
