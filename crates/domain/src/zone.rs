//! Zone origin matching over fully qualified, lowercased names.

/// True when `origin` is `qname` itself or a suffix of it on a label
/// boundary. The root origin `.` matches every name.
pub fn matches(qname: &str, origin: &str) -> bool {
    if origin == "." || qname == origin {
        return true;
    }
    match qname.strip_suffix(origin) {
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

/// The longest configured origin matching `qname`, standard DNS zone
/// matching. Ties can only occur between identical origin strings, in
/// which case the first one wins.
pub fn longest_match<'a, I>(origins: I, qname: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    origins
        .into_iter()
        .filter(|origin| matches(qname, origin))
        .max_by_key(|origin| origin.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_matches() {
        assert!(matches("example.com.", "example.com."));
    }

    #[test]
    fn test_subdomain_matches() {
        assert!(matches("foo.example.com.", "example.com."));
        assert!(matches("a.b.foo.example.com.", "example.com."));
    }

    #[test]
    fn test_label_boundary_is_required() {
        assert!(!matches("fooexample.com.", "example.com."));
        assert!(!matches("otherexample.com.", "example.com."));
    }

    #[test]
    fn test_unrelated_name_does_not_match() {
        assert!(!matches("example.org.", "example.com."));
        assert!(!matches("com.", "example.com."));
    }

    #[test]
    fn test_root_matches_everything() {
        assert!(matches("anything.example.", "."));
        assert!(matches(".", "."));
    }

    #[test]
    fn test_longest_match_wins() {
        let origins = ["com.", "example.com.", "foo.example.com."];
        assert_eq!(
            longest_match(origins, "bar.foo.example.com."),
            Some("foo.example.com.")
        );
        assert_eq!(longest_match(origins, "baz.example.com."), Some("example.com."));
        assert_eq!(longest_match(origins, "example.net."), None);
    }
}
