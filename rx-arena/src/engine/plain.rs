//! The `regex` crate back-end: the engine a program gets when it does not
//! pick one.

use crate::engine::{syntax, BuildError, Matcher};

pub(crate) fn compile(
    pattern: &str,
) -> Result<Box<dyn Matcher>, BuildError> {
    let hir = syntax::parse_full_match(pattern)?;
    // `regex` has no HIR entry point; it gets the anchored HIR's printed
    // form, which parses back to the same expression.
    let re = regex::Regex::new(&hir.to_string())?;
    Ok(Box::new(PlainMatcher { re }))
}

struct PlainMatcher {
    re: regex::Regex,
}

impl Matcher for PlainMatcher {
    #[inline]
    fn test(&self, haystack: &str) -> bool {
        self.re.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::Engine;

    #[test]
    fn anchors_survive_the_printed_form() {
        let re = Engine::Regex.compile("bc").unwrap();
        assert!(re.test("bc"));
        assert!(!re.test("abcd"));
    }
}
