/// Path utilities for generated links
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

/// Checks whether a path starts with exactly one `/`
///
/// # Examples
///
/// ```
/// use rhtmx_links::path::has_single_leading_slash;
///
/// assert!(has_single_leading_slash("/"));
/// assert!(has_single_leading_slash("/about"));
/// assert!(has_single_leading_slash("/about//team"));
///
/// assert!(!has_single_leading_slash(""));
/// assert!(!has_single_leading_slash("about"));
/// assert!(!has_single_leading_slash("//about"));
/// assert!(!has_single_leading_slash("\\about"));
/// ```
pub fn has_single_leading_slash(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/') && !matches!(chars.next(), Some('/') | Some('\\'))
}

/// Forces a path to start with exactly one `/`
///
/// Returns `Cow::Borrowed` when the path is already well-formed. Every
/// leading `/` or `\` is dropped before a single `/` is prepended. Slashes
/// after the first segment are left as they are.
///
/// # Examples
///
/// ```
/// use rhtmx_links::path::with_leading_slash;
/// use std::borrow::Cow;
///
/// let path = with_leading_slash("/about");
/// assert!(matches!(path, Cow::Borrowed("/about")));
///
/// assert_eq!(with_leading_slash("about"), "/about");
/// assert_eq!(with_leading_slash("///about"), "/about");
/// assert_eq!(with_leading_slash(""), "/");
/// ```
pub fn with_leading_slash(path: &str) -> Cow<'_, str> {
    if has_single_leading_slash(path) {
        return Cow::Borrowed(path);
    }

    let trimmed = path.trim_start_matches(|c| c == '/' || c == '\\');
    if trimmed.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", trimmed))
    }
}
