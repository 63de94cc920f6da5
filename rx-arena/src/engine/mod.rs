/*!
The back-end registry: a closed set of regex engines, each reachable through
the same one-method [`Matcher`] capability.

Every back-end receives the pattern anchored at both ends (see [`syntax`]),
so [`Matcher::test`] always answers "does the *whole* haystack match", never
"is there a match somewhere". That uniformity is what makes the correctness
gate's cross-engine comparison meaningful.

Selecting a back-end goes through [`Engine`], an enumerated identifier.
Compilation dispatches through an explicit registry table, one row per
variant; adding an engine means adding a variant, a name and a row, and every
call site picks it up through [`Engine::compile`].

## Example
```
use rx_arena::engine::Engine;

let matcher = Engine::Hybrid.compile(".*y")?;
assert!(matcher.test("xxxy"));
assert!(!matcher.test("yxxx"));
# Ok::<(), rx_arena::engine::BuildError>(())
```
*/

use std::{fmt, str::FromStr};

use itertools::Itertools;
use log::debug;

mod automata;
mod plain;
mod syntax;

/// The one capability a compiled back-end must expose.
///
/// `test` must be pure: same haystack, same answer, on every call. The
/// measurement loop leans on this; a matcher that mutated itself between
/// calls would produce timings that mean nothing.
pub trait Matcher: Send + Sync {
    /// Returns whether the whole of `haystack` matches the pattern.
    fn test(&self, haystack: &str) -> bool;
}

/// The closed set of selectable back-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// The `regex` crate's top-level API, as most programs use it.
    Regex,
    /// `regex-automata`'s meta engine: the machinery underneath
    /// [`Engine::Regex`] without the wrapper types.
    Meta,
    /// A fully determinized dense DFA. Highest compile cost, cheapest steps.
    Dense,
    /// The dense DFA converted to its sparse representation: smaller,
    /// slower steps.
    Sparse,
    /// The lazy DFA: states determinized on the fly and cached.
    Hybrid,
    /// The Thompson NFA simulation.
    PikeVm,
    /// The bounded backtracker over the Thompson NFA.
    Backtrack,
}

/// One selectable back-end: its identifier and its compilation entry point.
struct Registration {
    engine: Engine,
    compile: fn(&str) -> Result<Box<dyn Matcher>, BuildError>,
}

/// One row per [`Engine`] variant; `Engine::compile` dispatches through
/// here, never through a `match` at the call site.
static REGISTRY: &[Registration] = &[
    Registration { engine: Engine::Regex, compile: plain::compile },
    Registration { engine: Engine::Meta, compile: automata::meta },
    Registration { engine: Engine::Dense, compile: automata::dense },
    Registration { engine: Engine::Sparse, compile: automata::sparse },
    Registration { engine: Engine::Hybrid, compile: automata::hybrid },
    Registration { engine: Engine::PikeVm, compile: automata::pikevm },
    Registration { engine: Engine::Backtrack, compile: automata::backtrack },
];

impl Engine {
    /// Every registered back-end, in registry order.
    pub const ALL: &'static [Engine] = &[
        Engine::Regex,
        Engine::Meta,
        Engine::Dense,
        Engine::Sparse,
        Engine::Hybrid,
        Engine::PikeVm,
        Engine::Backtrack,
    ];

    /// The identifier used by [`FromStr`] and [`fmt::Display`].
    pub fn name(self) -> &'static str {
        match self {
            Engine::Regex => "regex",
            Engine::Meta => "meta",
            Engine::Dense => "dense",
            Engine::Sparse => "sparse",
            Engine::Hybrid => "hybrid",
            Engine::PikeVm => "pikevm",
            Engine::Backtrack => "backtrack",
        }
    }

    /// Compiles `pattern` for this back-end.
    ///
    /// Compilation cost is paid exactly once here; the returned matcher
    /// amortizes it across every later [`Matcher::test`] call. A pattern the
    /// back-end rejects surfaces as that back-end's own error, unchanged.
    pub fn compile(
        self,
        pattern: &str,
    ) -> Result<Box<dyn Matcher>, BuildError> {
        debug!("compiling {pattern:?} with {self}");
        let registration = REGISTRY
            .iter()
            .find(|r| r.engine == self)
            .expect("registry has a row for every engine");
        (registration.compile)(pattern)
    }

    fn known_names() -> String {
        Engine::ALL.iter().map(|e| e.name()).join(", ")
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = UnknownEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| UnknownEngineError { name: s.to_owned() })
    }
}

/// A name outside the enumerated back-end set.
///
/// Fatal for the run that requested it: there is no default back-end to
/// fall back to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "unknown engine name {name:?} (known engines: {known})",
    known = Engine::known_names()
)]
pub struct UnknownEngineError {
    pub name: String,
}

/// A pattern rejected at compile time, by the shared parser or by the
/// selected back-end's own builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Rejected by the syntax parser, before any back-end saw it.
    #[error(transparent)]
    Syntax(#[from] regex_syntax::Error),
    #[error(transparent)]
    Plain(#[from] regex::Error),
    #[error(transparent)]
    Nfa(#[from] regex_automata::nfa::thompson::BuildError),
    #[error(transparent)]
    Dfa(#[from] regex_automata::dfa::dense::BuildError),
    #[error(transparent)]
    Hybrid(#[from] regex_automata::hybrid::BuildError),
    #[error(transparent)]
    Meta(#[from] regex_automata::meta::BuildError),
}
