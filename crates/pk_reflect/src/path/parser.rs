use crate::convert::ConversionError;

#[inline]
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part)
}

fn bracketed(segment: &str) -> Option<(&str, &str)> {
    let open = segment.find('[')?;
    let inner = segment[open + 1..].strip_suffix(']')?;
    Some((&segment[..open], inner))
}

/// Returns `true` if `segment` is an identifier followed by `[digits]`.
///
/// ```
/// use pk_reflect::path::is_indexed;
///
/// assert!(is_indexed("values[12]"));
/// assert!(!is_indexed("values"));
/// assert!(!is_indexed("values[]"));
/// assert!(!is_indexed("values[-1]"));
/// ```
pub fn is_indexed(segment: &str) -> bool {
    bracketed(segment).is_some_and(|(name, inner)| {
        is_identifier(name) && !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Parses the bracketed index of a segment.
///
/// ```
/// use pk_reflect::path::extract_index;
///
/// assert_eq!(extract_index("values[12]"), Ok(12));
/// assert!(extract_index("values[x]").is_err());
/// ```
pub fn extract_index(segment: &str) -> Result<usize, ConversionError> {
    let invalid = || ConversionError::NumberFormat(segment.to_owned());
    let (_, inner) = bracketed(segment).ok_or_else(invalid)?;

    // NOTE: a single leading '-' is skipped, so "[-1]" parses as 1 rather
    // than failing. This is very likely unintended but callers may rely
    // on it; `is_indexed` never produces such a segment.
    let digits = inner.strip_prefix('-').unwrap_or(inner);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse::<usize>().map_err(|_| invalid())
}

/// Returns `true` if `path` is two or more valid segments joined by `.`.
///
/// ```
/// use pk_reflect::path::is_nested;
///
/// assert!(is_nested("valueObjectList[0].value"));
/// assert!(!is_nested("value"));
/// assert!(!is_nested("value."));
/// assert!(!is_nested("1.two"));
/// ```
pub fn is_nested(path: &str) -> bool {
    path.contains('.')
        && path
            .split('.')
            .all(|segment| is_identifier(segment) || is_indexed(segment))
}

/// Splits off the first segment of a path.
///
/// ```
/// use pk_reflect::path::split;
///
/// assert_eq!(split("a.b.c"), ("a", Some("b.c")));
/// assert_eq!(split("a"), ("a", None));
/// ```
pub fn split(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_index, is_indexed, is_nested};
    use crate::convert::ConversionError;

    #[test]
    fn indexed_segments() {
        assert!(is_indexed("a[0]"));
        assert!(is_indexed("_list$2[007]"));
        assert!(!is_indexed("[0]"));
        assert!(!is_indexed("a[0]x"));
        assert!(!is_indexed("a[1]]"));
        assert!(!is_indexed("9a[1]"));
        assert!(!is_indexed("é[0]"));
        assert!(!is_indexed("a٣[0]"));
    }

    #[test]
    fn index_extraction() {
        assert_eq!(extract_index("values[0]"), Ok(0));
        assert_eq!(extract_index("values[42]"), Ok(42));
        assert_eq!(
            extract_index("values[]"),
            Err(ConversionError::NumberFormat("values[]".into()))
        );
        assert!(extract_index("values[1x]").is_err());
        assert!(extract_index("values[99999999999999999999999999]").is_err());
    }

    #[test]
    fn negative_index_reads_as_positive() {
        assert_eq!(extract_index("values[-1]"), Ok(1));
        assert!(extract_index("values[-]").is_err());
    }

    #[test]
    fn nested_paths() {
        assert!(is_nested("a.b"));
        assert!(is_nested("a[1].b[2].c"));
        assert!(!is_nested(".a"));
        assert!(!is_nested("a..b"));
        assert!(!is_nested("a.b[]"));
        assert!(!is_nested("a².b"));
        assert!(!is_nested("a.ñ"));
    }
}
