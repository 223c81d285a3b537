//! Helpers for dissecting JVM binary class names.
//!
//! Binary names use `.` between packages and `$` between enclosing and
//! nested types (`com.example.Outer$Inner`). Everything in the model keeps
//! names in binary form; display decisions belong to the renderer.

/// Package portion of a binary name (`com.example` for `com.example.Foo`).
///
/// Returns the empty string for types in the default package.
pub fn package_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(index) => &qualified[..index],
        None => "",
    }
}

/// Binary class name without its package (`Outer$Inner`).
pub fn binary_simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(index) => &qualified[index + 1..],
        None => qualified,
    }
}

/// Innermost simple name (`Inner` for `com.example.Outer$Inner`).
pub fn simple_name(qualified: &str) -> &str {
    let binary = binary_simple_name(qualified);
    match binary.rfind('$') {
        Some(index) => &binary[index + 1..],
        None => binary,
    }
}

/// Binary name of the outermost enclosing type (`com.example.Outer`).
pub fn outermost_name(qualified: &str) -> &str {
    let binary = binary_simple_name(qualified);
    match binary.find('$') {
        Some(index) => &qualified[..qualified.len() - binary.len() + index],
        None => qualified,
    }
}

/// Best-effort detection of compiler-generated names.
///
/// One bounded rule: an all-digit final `$`-segment (anonymous class, e.g.
/// `Foo$1`) or a `$$Lambda` marker. Acquisition collaborators that know
/// better set the explicit synthetic flag on the reference instead.
pub fn is_synthetic_name(qualified: &str) -> bool {
    if qualified.contains("$$Lambda") {
        return true;
    }

    let simple = simple_name(qualified);
    !simple.is_empty() && simple.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("java.util.Map"), "java.util");
        assert_eq!(package_name("Foo"), "");
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("java.util.Map"), "Map");
        assert_eq!(simple_name("com.example.Outer$Inner"), "Inner");
        assert_eq!(simple_name("Foo"), "Foo");
    }

    #[test]
    fn test_outermost_name() {
        assert_eq!(outermost_name("com.example.Outer$Inner"), "com.example.Outer");
        assert_eq!(outermost_name("com.example.Outer$Inner$Deep"), "com.example.Outer");
        assert_eq!(outermost_name("java.util.Map"), "java.util.Map");
        assert_eq!(outermost_name("Outer$Inner"), "Outer");
    }

    #[test]
    fn test_synthetic_names() {
        assert!(is_synthetic_name("com.example.Foo$1"));
        assert!(is_synthetic_name("com.example.Foo$$Lambda$7"));
        assert!(!is_synthetic_name("com.example.Foo$Bar"));
        assert!(!is_synthetic_name("com.example.Foo"));
    }
}
