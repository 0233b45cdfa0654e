//! Canonical navigation paths.
//!
//! Requests arrive in whatever shape an address bar or history entry
//! produced; declared tables are written by hand. Both are reduced to one
//! canonical spelling before any comparison, so lookups stay exact string
//! equality.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form
///
/// # Rules
///
/// - Must not be empty
/// - Must start with `/`
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use vlearn_router::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/ast-parse"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("ast-parse")); // Missing leading /
/// assert!(!is_canonical_path("/ast-parse/")); // Trailing /
/// assert!(!is_canonical_path("/ast//parse")); // Double //
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Reduces a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical, so the
/// common case allocates nothing.
///
/// # Handles
///
/// - Trailing slashes: `/ast-parse/` → `/ast-parse`
/// - Repeated separators: `//ast-parse` → `/ast-parse`
/// - Missing leading slash: `ast-parse` → `/ast-parse`
/// - Empty input becomes the root `/`
///
/// # Examples
///
/// ```
/// use vlearn_router::canonicalize_path;
/// use std::borrow::Cow;
///
/// let path = canonicalize_path("/ast-parse");
/// assert!(matches!(path, Cow::Borrowed("/ast-parse")));
///
/// assert_eq!(canonicalize_path("/ast-parse/"), "/ast-parse");
/// assert_eq!(canonicalize_path("//ast-parse"), "/ast-parse");
/// assert_eq!(canonicalize_path("ast-parse"), "/ast-parse");
/// assert_eq!(canonicalize_path(""), "/");
/// ```
pub fn canonicalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical_path(path) {
        return Cow::Borrowed(path);
    }

    let joined = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_canonical_path() {
        assert!(is_canonical_path("/"));
        assert!(is_canonical_path("/ast-parse"));
        assert!(is_canonical_path("/docs/grammar"));

        assert!(!is_canonical_path(""));
        assert!(!is_canonical_path("ast-parse"));
        assert!(!is_canonical_path("/ast-parse/"));
        assert!(!is_canonical_path("/ast//parse"));
    }

    #[test]
    fn test_canonicalize_borrows_canonical_input() {
        assert!(matches!(canonicalize_path("/"), Cow::Borrowed("/")));
        assert!(matches!(
            canonicalize_path("/ast-parse"),
            Cow::Borrowed("/ast-parse")
        ));
    }

    #[test]
    fn test_canonicalize_trailing_slash() {
        assert_eq!(canonicalize_path("/ast-parse/"), "/ast-parse");
        assert_eq!(canonicalize_path("/docs/grammar/"), "/docs/grammar");
    }

    #[test]
    fn test_canonicalize_repeated_separators() {
        assert_eq!(canonicalize_path("//ast-parse"), "/ast-parse");
        assert_eq!(canonicalize_path("/docs///grammar//"), "/docs/grammar");
    }

    #[test]
    fn test_canonicalize_missing_leading_slash() {
        assert_eq!(canonicalize_path("ast-parse"), "/ast-parse");
    }

    #[test]
    fn test_canonicalize_empty_is_root() {
        assert_eq!(canonicalize_path(""), "/");
        assert_eq!(canonicalize_path("///"), "/");
    }
}
