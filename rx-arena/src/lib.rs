/*!
A micro-benchmark harness for comparing regular-expression back-ends.

Give it a pattern, a haystack and an expected outcome, pick one of the
registered back-ends, and the harness compiles the pattern once, checks the
compiled matcher against the expectation, then hammers the matcher in a tight
loop so an external timing driver (criterion here) sees nothing but matching
cost.

## Features
- A closed [registry](engine) of interchangeable back-ends, from the `regex`
  crate's everyday API down to `regex-automata`'s dense DFA, all reachable
  through the same one-method [`Matcher`](engine::Matcher) capability.
- Whole-haystack match semantics for every back-end, so "fast but wrong"
  engines cannot win: patterns are anchored at both ends once, centrally,
  before any back-end sees them.
- A [correctness gate](harness::Trial::verify) that must pass before any
  timing starts, and an in-loop assertion that aborts measurement the moment
  a back-end stops agreeing with it.
- A [deterministic corpus](fixture): byte-identical input for every back-end,
  every run.

## Usage
```
use rx_arena::{engine::Engine, harness, scenario::{Haystack, Scenario}};

let scenario = Scenario::builder()
    .name("literal")
    .pattern(".*y")
    .haystack(Haystack::Literal("xxxy"))
    .expect(true)
    .build();

for &engine in Engine::ALL {
    harness::run().engine(engine).scenario(&scenario).nreps(10).call()?;
}
# Ok::<(), rx_arena::harness::Error>(())
```

The repetition count and all statistics (sampling, confidence intervals,
reporting) belong to the caller; this crate only guarantees that what gets
timed is a validated, deterministic matcher.
*/

pub mod engine;
pub mod fixture;
pub mod harness;
pub mod scenario;
