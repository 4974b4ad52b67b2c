/// Query-string composition for generated links
use std::borrow::Cow;
use std::collections::HashSet;

use crate::params::{LinkParams, ParamValue, Scalar};

/// Percent-encodes a single value
pub(crate) fn encode_scalar(value: &Scalar) -> Cow<'_, str> {
    match value {
        Scalar::String(text) => urlencoding::encode(text),
        other => Cow::Owned(urlencoding::encode(&other.to_string()).into_owned()),
    }
}

/// Encodes every element on its own, then joins them with `separator`
pub(crate) fn encode_list(values: &[Scalar], separator: &str) -> String {
    values
        .iter()
        .map(encode_scalar)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Builds `?key=value&...` from every parameter not listed in `skip`
///
/// - parameters keep their insertion order
/// - `Null` values are left out
/// - a list becomes one pair whose elements are joined by an encoded `/`
/// - returns an empty string when no pair remains
///
/// Encoding keeps only ASCII alphanumerics and `-_.~`. Browsers'
/// `encodeURIComponent` also leaves `!'()*` as they are, so a link built here
/// can differ byte-wise from one built in JavaScript (`%21` vs `!`) while
/// decoding to the same value.
///
/// # Examples
///
/// ```
/// use rhtmx_links::query::build_query;
/// use rhtmx_links::LinkParams;
/// use std::collections::HashSet;
///
/// let params = LinkParams::new()
///     .with("lang", "javascript")
///     .with("tags", vec!["first-param", "second-param"]);
///
/// assert_eq!(
///     build_query(&params, &HashSet::new()),
///     "?lang=javascript&tags=first-param%2Fsecond-param"
/// );
///
/// let skip: HashSet<&str> = ["lang", "tags"].into_iter().collect();
/// assert_eq!(build_query(&params, &skip), "");
/// ```
pub fn build_query(params: &LinkParams, skip: &HashSet<&str>) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter(|(name, _)| !skip.contains(name))
        .filter_map(|(name, value)| {
            let encoded = match value {
                ParamValue::Null => return None,
                ParamValue::Scalar(scalar) => encode_scalar(scalar).into_owned(),
                ParamValue::List(values) => encode_list(values, "%2F"),
            };
            Some(format!("{}={}", urlencoding::encode(name), encoded))
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}
