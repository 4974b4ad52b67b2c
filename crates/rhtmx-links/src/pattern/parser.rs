/// Pattern compiler
///
/// Turns a pattern string into [`PatternToken`]s in a single pass.
///
/// # Syntax
///
/// 1. **Required param**: `:name` where the name is `[A-Za-z0-9_]+`
/// 2. **Optional param**: `:name?`, the preceding `/` or `.` is dropped with it
/// 3. **Optional group**: `{prefix:name suffix}?`
/// 4. **Plain group**: `{prefix:name suffix}` (same as writing it without braces)
/// 5. **Escape**: `\:` `\{` `\}` `\?` `\\` produce the literal character
/// 6. **Literal**: any other text
///
/// A `?` directly after a parameter inside a group is rejected: the modifier
/// belongs after the closing `}`.
use std::iter::Peekable;
use std::str::CharIndices;

use super::token::{PatternError, PatternToken};
use super::CompiledPattern;

type Chars<'a> = Peekable<CharIndices<'a>>;

/// Pieces of a `{ ... }` group before the `?` modifier is known
struct Group {
    prefix: String,
    name: Option<String>,
    suffix: String,
}

/// Compiles a route pattern (pure function)
///
/// # Examples
///
/// ```
/// use rhtmx_links::pattern::{compile_pattern, PatternToken};
///
/// let pattern = compile_pattern("/users/:id").unwrap();
/// assert_eq!(
///     pattern.tokens(),
///     &[
///         PatternToken::Literal("/users/".to_string()),
///         PatternToken::Param("id".to_string()),
///     ]
/// );
///
/// assert!(compile_pattern("/users/{:id").is_err());
/// ```
pub fn compile_pattern(source: &str) -> Result<CompiledPattern, PatternError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '\\' => literal.push(read_escaped(&mut chars)?),
            ':' => {
                let name = read_name(&mut chars, position)?;
                if chars.next_if(|&(_, c)| c == '?').is_some() {
                    let prefix = take_shorthand_prefix(&mut literal);
                    flush_literal(&mut tokens, &mut literal);
                    tokens.push(PatternToken::Optional {
                        prefix,
                        name,
                        suffix: String::new(),
                    });
                } else {
                    flush_literal(&mut tokens, &mut literal);
                    tokens.push(PatternToken::Param(name));
                }
            }
            '{' => {
                let group = read_group(&mut chars)?;
                let optional = chars.next_if(|&(_, c)| c == '?').is_some();

                match (group.name, optional) {
                    (Some(name), true) => {
                        flush_literal(&mut tokens, &mut literal);
                        tokens.push(PatternToken::Optional {
                            prefix: group.prefix,
                            name,
                            suffix: group.suffix,
                        });
                    }
                    (Some(name), false) => {
                        literal.push_str(&group.prefix);
                        flush_literal(&mut tokens, &mut literal);
                        tokens.push(PatternToken::Param(name));
                        literal.push_str(&group.suffix);
                    }
                    (None, true) => return Err(PatternError::OptionalGroupWithoutParam),
                    (None, false) => literal.push_str(&group.prefix),
                }
            }
            '}' => return Err(PatternError::UnexpectedGroupClose),
            _ => literal.push(c),
        }
    }

    flush_literal(&mut tokens, &mut literal);

    Ok(CompiledPattern {
        source: source.to_string(),
        tokens,
    })
}

fn flush_literal(tokens: &mut Vec<PatternToken>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(PatternToken::Literal(std::mem::take(literal)));
    }
}

/// `/:id?` and `.:ext?` carry their separator into the optional token
fn take_shorthand_prefix(literal: &mut String) -> String {
    match literal.chars().last() {
        Some(separator @ ('/' | '.')) => {
            literal.pop();
            separator.to_string()
        }
        _ => String::new(),
    }
}

fn read_escaped(chars: &mut Chars<'_>) -> Result<char, PatternError> {
    chars
        .next()
        .map(|(_, c)| c)
        .ok_or(PatternError::TrailingEscape)
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn read_name(chars: &mut Chars<'_>, colon_position: usize) -> Result<String, PatternError> {
    let mut name = String::new();
    while let Some((_, c)) = chars.next_if(|&(_, c)| is_name_char(c)) {
        name.push(c);
    }

    if name.is_empty() {
        Err(PatternError::MissingParamName(colon_position))
    } else {
        Ok(name)
    }
}

/// Reads up to and including the closing `}`; the opening `{` is already consumed
fn read_group(chars: &mut Chars<'_>) -> Result<Group, PatternError> {
    let mut group = Group {
        prefix: String::new(),
        name: None,
        suffix: String::new(),
    };

    while let Some((position, c)) = chars.next() {
        let text = match c {
            '}' => return Ok(group),
            '{' => return Err(PatternError::NestedGroup),
            ':' => {
                if group.name.is_some() {
                    return Err(PatternError::MultipleParamsInGroup);
                }
                group.name = Some(read_name(chars, position)?);
                if let Some(&(modifier_position, '?')) = chars.peek() {
                    return Err(PatternError::ModifierInsideGroup(modifier_position));
                }
                continue;
            }
            '\\' => read_escaped(chars)?,
            _ => c,
        };

        if group.name.is_some() {
            group.suffix.push(text);
        } else {
            group.prefix.push(text);
        }
    }

    Err(PatternError::UnclosedGroup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<PatternToken> {
        compile_pattern(source).unwrap().tokens().to_vec()
    }

    fn literal(text: &str) -> PatternToken {
        PatternToken::Literal(text.to_string())
    }

    fn param(name: &str) -> PatternToken {
        PatternToken::Param(name.to_string())
    }

    fn optional(prefix: &str, name: &str, suffix: &str) -> PatternToken {
        PatternToken::Optional {
            prefix: prefix.to_string(),
            name: name.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn test_compile_static() {
        assert_eq!(tokens("/a-route-pattern"), vec![literal("/a-route-pattern")]);
    }

    #[test]
    fn test_compile_empty() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn test_compile_param_inside_segment() {
        assert_eq!(
            tokens("/a-route-pattern-with-:lang"),
            vec![literal("/a-route-pattern-with-"), param("lang")]
        );
    }

    #[test]
    fn test_compile_param_name_stops_at_non_word() {
        assert_eq!(
            tokens("/files/:name.:ext"),
            vec![literal("/files/"), param("name"), literal("."), param("ext")]
        );
    }

    #[test]
    fn test_compile_optional_group() {
        assert_eq!(
            tokens("/a-route-pattern-with{-:optionalLang}?"),
            vec![
                literal("/a-route-pattern-with"),
                optional("-", "optionalLang", "")
            ]
        );
    }

    #[test]
    fn test_compile_optional_group_with_suffix() {
        assert_eq!(
            tokens("/blog{/page-:page/}?latest"),
            vec![
                literal("/blog"),
                optional("/page-", "page", "/"),
                literal("latest")
            ]
        );
    }

    #[test]
    fn test_compile_optional_shorthand() {
        assert_eq!(
            tokens("/posts/:id?"),
            vec![literal("/posts"), optional("/", "id", "")]
        );
        assert_eq!(
            tokens("/feed.:format?"),
            vec![literal("/feed"), optional(".", "format", "")]
        );
        assert_eq!(tokens("/x-:id?"), vec![literal("/x-"), optional("", "id", "")]);
    }

    #[test]
    fn test_compile_plain_group_is_flattened() {
        assert_eq!(
            tokens("/users{/:id}/edit"),
            vec![literal("/users/"), param("id"), literal("/edit")]
        );
        assert_eq!(tokens("/{static}"), vec![literal("/static")]);
    }

    #[test]
    fn test_compile_escapes() {
        assert_eq!(tokens("/time\\:now"), vec![literal("/time:now")]);
        assert_eq!(tokens("/\\{x\\}"), vec![literal("/{x}")]);
    }

    #[test]
    fn test_compile_errors() {
        assert_eq!(
            compile_pattern("/users/{:id").unwrap_err(),
            PatternError::UnclosedGroup
        );
        assert_eq!(
            compile_pattern("/{a{:b}}").unwrap_err(),
            PatternError::NestedGroup
        );
        assert_eq!(
            compile_pattern("/users}").unwrap_err(),
            PatternError::UnexpectedGroupClose
        );
        assert_eq!(
            compile_pattern("/users/:").unwrap_err(),
            PatternError::MissingParamName(7)
        );
        assert_eq!(
            compile_pattern("/{:a-:b}?").unwrap_err(),
            PatternError::MultipleParamsInGroup
        );
        assert_eq!(
            compile_pattern("/{static}?").unwrap_err(),
            PatternError::OptionalGroupWithoutParam
        );
        assert_eq!(
            compile_pattern("/oops\\").unwrap_err(),
            PatternError::TrailingEscape
        );
    }

    #[test]
    fn test_compile_rejects_modifier_inside_group() {
        assert_eq!(
            compile_pattern("/x{/:id?}").unwrap_err(),
            PatternError::ModifierInsideGroup(7)
        );
        assert_eq!(
            compile_pattern("/x{/:id?}?").unwrap_err(),
            PatternError::ModifierInsideGroup(7)
        );
    }

    #[test]
    fn test_compile_escaped_question_mark_in_group() {
        assert_eq!(
            tokens("/x{/:id\\?}?"),
            vec![literal("/x"), optional("/", "id", "?")]
        );
    }
}
