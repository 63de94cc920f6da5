//! The statically defined benchmark scenarios.
//!
//! A scenario is a (pattern, haystack, expected outcome) triple. The set
//! below pairs cheap literal scans with long-corpus scans and one
//! deliberately adversarial pattern, so back-ends get exercised on setup
//! cost, stepping cost and worst-case behavior separately.

use bon::Builder;

use crate::fixture;

/// Where a scenario's haystack comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haystack {
    /// A short fixed string.
    Literal(&'static str),
    /// The large generated corpus from [`fixture::long_haystack`].
    LongData,
}

impl Haystack {
    /// The haystack text itself. For [`Haystack::LongData`] this is the
    /// shared memoized corpus, identical for every caller.
    pub fn text(self) -> &'static str {
        match self {
            Haystack::Literal(s) => s,
            Haystack::LongData => fixture::long_haystack(),
        }
    }
}

/// One benchmark case: a pattern, the input to scan, and the boolean every
/// back-end must produce on it.
#[derive(Debug, Clone, Builder)]
pub struct Scenario {
    pub name: &'static str,
    pub pattern: &'static str,
    pub haystack: Haystack,
    pub expect: bool,
}

/// Every defined scenario.
pub fn all() -> Vec<Scenario> {
    vec![
        // Kills engines that backtrack naively; every registered back-end
        // runs it in linear or bounded time.
        Scenario::builder()
            .name("pathological_backtracking")
            .pattern(
                "a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?a?\
                 aaaaaaaaaaaaaaaaaaaaaaaa",
            )
            .haystack(Haystack::Literal(fixture::A24))
            .expect(true)
            .build(),
        Scenario::builder()
            .name("literal")
            .pattern(".*y")
            .haystack(Haystack::Literal(fixture::X50Y))
            .expect(true)
            .build(),
        Scenario::builder()
            .name("not_literal")
            .pattern(".*.y")
            .haystack(Haystack::Literal(fixture::X50Y))
            .expect(true)
            .build(),
        Scenario::builder()
            .name("match_class")
            .pattern(".*[abcdw]")
            .haystack(Haystack::Literal(fixture::X80W))
            .expect(true)
            .build(),
        Scenario::builder()
            .name("match_class_in_range")
            .pattern(".*[ac]")
            .haystack(Haystack::Literal(fixture::B80C))
            .expect(true)
            .build(),
        Scenario::builder()
            .name("anchored_literal_short_non_match")
            .pattern("zbc(d|e).*")
            .haystack(Haystack::Literal(fixture::ALPHABET))
            .expect(false)
            .build(),
        Scenario::builder()
            .name("anchored_literal_long_non_match")
            .pattern("zbc(d|e).*")
            .haystack(Haystack::LongData)
            .expect(false)
            .build(),
        Scenario::builder()
            .name("anchored_short_match")
            .pattern(".bc(d|e).*")
            .haystack(Haystack::Literal(fixture::ALPHABET))
            .expect(true)
            .build(),
        Scenario::builder()
            .name("anchored_long_match")
            .pattern(".bc(d|e).*")
            .haystack(Haystack::LongData)
            .expect(true)
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn long_scenarios_share_one_corpus() {
        let texts: Vec<_> = all()
            .iter()
            .filter(|s| s.haystack == Haystack::LongData)
            .map(|s| s.haystack.text())
            .collect();
        assert!(texts.len() >= 2);
        for text in &texts[1..] {
            assert!(std::ptr::eq(texts[0], *text));
        }
    }
}
