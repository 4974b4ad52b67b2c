/// Typed tokens of a compiled route pattern
use thiserror::Error;

/// One piece of a compiled pattern
///
/// Functional sum type: rendering a pattern is a walk over these tokens.
///
/// # Examples
///
/// ```
/// use rhtmx_links::pattern::{compile_pattern, PatternToken};
///
/// let pattern = compile_pattern("/docs{-:lang}?/:slug").unwrap();
/// assert_eq!(
///     pattern.tokens(),
///     &[
///         PatternToken::Literal("/docs".to_string()),
///         PatternToken::Optional {
///             prefix: "-".to_string(),
///             name: "lang".to_string(),
///             suffix: String::new(),
///         },
///         PatternToken::Literal("/".to_string()),
///         PatternToken::Param("slug".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Text copied to the output as-is
    Literal(String),
    /// Required parameter: `:name`
    Param(String),
    /// Optional group: `{prefix:name suffix}?` or the `:name?` shorthand
    ///
    /// The whole group, prefix and suffix included, disappears when the
    /// parameter has no value.
    Optional {
        prefix: String,
        name: String,
        suffix: String,
    },
}

impl PatternToken {
    /// Parameter referenced by this token, if any
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternToken::Literal(_) => None,
            PatternToken::Param(name) | PatternToken::Optional { name, .. } => Some(name),
        }
    }
}

/// Reasons a pattern string can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("group opened with `{{` is never closed")]
    UnclosedGroup,

    #[error("groups cannot be nested")]
    NestedGroup,

    #[error("unexpected `}}` without an opening `{{`")]
    UnexpectedGroupClose,

    #[error("`:` at position {0} is not followed by a parameter name")]
    MissingParamName(usize),

    #[error("a group can hold at most one parameter")]
    MultipleParamsInGroup,

    #[error("`?` at position {0} must follow the closing `}}` of its group")]
    ModifierInsideGroup(usize),

    #[error("optional group has no parameter to test")]
    OptionalGroupWithoutParam,

    #[error("pattern ends with an unfinished `\\` escape")]
    TrailingEscape,
}
