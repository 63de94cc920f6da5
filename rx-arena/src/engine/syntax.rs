//! Pattern parsing shared by every back-end.
//!
//! Back-ends differ in how (or whether) their own anchoring options behave,
//! so whole-haystack semantics are established once at the HIR level: parse
//! the pattern, then pin it between `\A` and `\z`. Every builder downstream
//! consumes the same anchored HIR (the `regex` crate, which has no HIR entry
//! point, gets its printed form).

use regex_syntax::{
    hir::{Hir, Look},
    Error,
};

/// Parses `pattern` and anchors it at both ends.
pub(crate) fn parse_full_match(pattern: &str) -> Result<Hir, Error> {
    Ok(anchor(regex_syntax::parse(pattern)?))
}

/// Wraps `hir` so a search can only report matches spanning the entire
/// haystack.
pub(crate) fn anchor(hir: Hir) -> Hir {
    Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)])
}

#[cfg(test)]
mod tests {
    use regex_syntax::parse;

    use super::*;

    #[test]
    fn anchor_wraps_literal() {
        let hir = parse_full_match("abc").unwrap();
        assert_eq!(
            hir,
            Hir::concat(vec![
                Hir::look(Look::Start),
                Hir::literal(*b"abc"),
                Hir::look(Look::End),
            ])
        );
    }

    #[test]
    fn anchored_hir_prints_a_parsable_pattern() {
        // The printed form feeds the `regex` back-end, so it has to parse.
        let hir = parse_full_match(".bc(d|e).*").unwrap();
        parse(&hir.to_string()).unwrap();
    }

    #[test]
    fn parse_errors_surface() {
        assert!(parse_full_match("a(b").is_err());
    }
}
