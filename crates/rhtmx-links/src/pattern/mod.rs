/// Pattern module for link generation
///
/// Patterns are compiled once, when the route table is built, into a flat
/// list of typed tokens. Producing a path is then a single walk over the
/// tokens with no string matching.
///
/// - `token`: the [`PatternToken`] sum type and [`PatternError`]
/// - `parser`: [`compile_pattern`]
pub mod parser;
pub mod token;

pub use parser::compile_pattern;
pub use token::{PatternError, PatternToken};

use crate::error::LinkError;
use crate::params::{LinkParams, ParamValue};
use crate::query::{encode_list, encode_scalar};

/// A pattern ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pub(crate) source: String,
    pub(crate) tokens: Vec<PatternToken>,
}

impl CompiledPattern {
    /// A pattern made of a single literal, with no parameter syntax
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_links::pattern::CompiledPattern;
    /// use rhtmx_links::LinkParams;
    ///
    /// let pattern = CompiledPattern::literal("/blog:post");
    /// assert!(!pattern.has_params());
    /// assert_eq!(pattern.render("blog:post", &LinkParams::new()).unwrap(), "/blog:post");
    /// ```
    pub fn literal(path: impl Into<String>) -> Self {
        let source = path.into();
        let tokens = if source.is_empty() {
            Vec::new()
        } else {
            vec![PatternToken::Literal(source.clone())]
        };
        Self { source, tokens }
    }

    /// The pattern string this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Names of every parameter the pattern references, in order of appearance
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(PatternToken::param_name)
    }

    pub fn has_params(&self) -> bool {
        self.param_names().next().is_some()
    }

    /// Substitutes parameters into the pattern
    ///
    /// Values are percent-encoded; list values are encoded one by one and
    /// joined with `/`. Optional groups whose parameter is missing or `Null`
    /// are left out entirely. A missing required parameter is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_links::pattern::compile_pattern;
    /// use rhtmx_links::LinkParams;
    ///
    /// let pattern = compile_pattern("/docs{-:lang}?/:slug").unwrap();
    ///
    /// let params = LinkParams::new().with("slug", "intro");
    /// assert_eq!(pattern.render("docs", &params).unwrap(), "/docs/intro");
    ///
    /// let params = params.with("lang", "fr");
    /// assert_eq!(pattern.render("docs", &params).unwrap(), "/docs-fr/intro");
    ///
    /// assert!(pattern.render("docs", &LinkParams::new()).is_err());
    /// ```
    pub fn render(&self, route: &str, params: &LinkParams) -> Result<String, LinkError> {
        let mut out = String::with_capacity(self.source.len());

        for token in &self.tokens {
            match token {
                PatternToken::Literal(text) => out.push_str(text),
                PatternToken::Param(name) => {
                    let value =
                        params
                            .get_present(name)
                            .ok_or_else(|| LinkError::MissingParameter {
                                route: route.to_string(),
                                param: name.clone(),
                            })?;
                    push_value(&mut out, value);
                }
                PatternToken::Optional {
                    prefix,
                    name,
                    suffix,
                } => {
                    if let Some(value) = params.get_present(name) {
                        out.push_str(prefix);
                        push_value(&mut out, value);
                        out.push_str(suffix);
                    }
                }
            }
        }

        Ok(out)
    }
}

fn push_value(out: &mut String, value: &ParamValue) {
    match value {
        ParamValue::Null => {}
        ParamValue::Scalar(scalar) => out.push_str(&encode_scalar(scalar)),
        ParamValue::List(values) => out.push_str(&encode_list(values, "/")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_static() {
        let pattern = compile_pattern("/a-route-pattern").unwrap();
        let params = LinkParams::new().with("lang", "javascript");
        assert_eq!(pattern.render("r", &params).unwrap(), "/a-route-pattern");
        assert!(!pattern.has_params());
    }

    #[test]
    fn test_render_required_param() {
        let pattern = compile_pattern("/a-route-pattern-with-:lang").unwrap();
        let params = LinkParams::new().with("lang", "javascript");
        assert_eq!(
            pattern.render("r", &params).unwrap(),
            "/a-route-pattern-with-javascript"
        );
    }

    #[test]
    fn test_render_encodes_values() {
        let pattern = compile_pattern("/search/:term").unwrap();
        let params = LinkParams::new().with("term", "rust & wasm/web");
        assert_eq!(
            pattern.render("r", &params).unwrap(),
            "/search/rust%20%26%20wasm%2Fweb"
        );
    }

    #[test]
    fn test_render_list_value() {
        let pattern = compile_pattern("/docs/:path").unwrap();
        let params = LinkParams::new().with("path", vec!["guide", "getting started"]);
        assert_eq!(
            pattern.render("r", &params).unwrap(),
            "/docs/guide/getting%20started"
        );
    }

    #[test]
    fn test_render_scalar_kinds() {
        let pattern = compile_pattern("/:a/:b/:c").unwrap();
        let params = LinkParams::new().with("a", 7).with("b", true).with("c", 2.5);
        assert_eq!(pattern.render("r", &params).unwrap(), "/7/true/2.5");
    }

    #[test]
    fn test_render_optional_group_absent() {
        let pattern = compile_pattern("/a-route-pattern-with{-:optionalLang}?").unwrap();

        assert_eq!(
            pattern.render("r", &LinkParams::new()).unwrap(),
            "/a-route-pattern-with"
        );

        let params = LinkParams::new().with("optionalLang", None::<&str>);
        assert_eq!(
            pattern.render("r", &params).unwrap(),
            "/a-route-pattern-with"
        );
    }

    #[test]
    fn test_render_optional_group_present() {
        let pattern = compile_pattern("/a-route-pattern-with{-:optionalLang}?").unwrap();
        let params = LinkParams::new().with("optionalLang", "rust");
        assert_eq!(
            pattern.render("r", &params).unwrap(),
            "/a-route-pattern-with-rust"
        );
    }

    #[test]
    fn test_render_missing_required_param() {
        let pattern = compile_pattern("/users/:id").unwrap();
        let params = LinkParams::new().with("id", None::<i64>);
        assert_eq!(
            pattern.render("user", &params).unwrap_err(),
            LinkError::MissingParameter {
                route: "user".to_string(),
                param: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_param_names() {
        let pattern = compile_pattern("/:a{-:b}?/x/:c?").unwrap();
        let names: Vec<&str> = pattern.param_names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
