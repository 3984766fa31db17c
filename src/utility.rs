// minforth utilities

/// Literals are unsigned: every character must be an ASCII decimal digit.
pub fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a literal token. `None` if the token is not a literal,
/// `Some(None)` if it is one but does not fit in an i64.
pub fn parse_integer(s: &str) -> Option<Option<i64>> {
    if is_integer(s) {
        Some(s.parse::<i64>().ok())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {

    use crate::utility::*;
    #[test]
    fn is_int1() {
        assert!(is_integer("42"));
    }
    #[test]
    fn is_int2() {
        assert!(!is_integer("-24"));
    }
    #[test]
    fn is_int3() {
        assert!(!is_integer("2.5"));
    }
    #[test]
    fn is_int4() {
        assert!(!is_integer("0b000"));
    }
    #[test]
    fn is_int5() {
        assert!(!is_integer("+7"));
    }
    #[test]
    fn is_int() {
        assert!(!is_integer("blah"));
        assert!(!is_integer(""));
    }

    #[test]
    fn parse1() {
        assert_eq!(parse_integer("007"), Some(Some(7)));
    }
    #[test]
    fn parse2() {
        assert_eq!(parse_integer("99999999999999999999"), Some(None));
    }
    #[test]
    fn parse3() {
        assert_eq!(parse_integer("dup"), None);
    }
}
