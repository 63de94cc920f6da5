//! Compile, verify, then measure: the phases of one benchmark trial.
//!
//! The phases run strictly in that order. Measurement never starts before
//! the correctness gate has passed, because timing a matcher that produces
//! the wrong answer is worse than not timing it at all.

use std::hint::black_box;

use bon::builder;
use log::debug;

use crate::{
    engine::{BuildError, Engine, Matcher},
    scenario::Scenario,
};

/// Why a trial stopped before producing a timing signal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Mismatch(#[from] Mismatch),
}

/// A compiled matcher disagreed with its scenario's expected outcome.
///
/// Raised by the correctness gate before any timing, or by the in-loop
/// assertion if a back-end stops being deterministic mid-measurement.
/// Either way the pairing is dead: it is not retried, and it must not be
/// timed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{engine} returned {observed} on scenario `{scenario}`, expected {expected}"
)]
pub struct Mismatch {
    pub scenario: &'static str,
    pub engine: Engine,
    pub expected: bool,
    pub observed: bool,
}

/// One (scenario, back-end) pairing with its own compiled matcher.
///
/// The matcher is compiled exactly once, owned until the trial is dropped,
/// and never shared with another trial.
pub struct Trial<'s> {
    engine: Engine,
    scenario: &'s Scenario,
    matcher: Box<dyn Matcher>,
}

impl<'s> Trial<'s> {
    /// Compiles `scenario`'s pattern with `engine`.
    pub fn new(
        engine: Engine,
        scenario: &'s Scenario,
    ) -> Result<Self, BuildError> {
        let matcher = engine.compile(scenario.pattern)?;
        Ok(Self { engine, scenario, matcher })
    }

    /// The compiled matcher, for handing to an external timing driver.
    pub fn matcher(&self) -> &dyn Matcher {
        &*self.matcher
    }

    /// The correctness gate: evaluates the matcher exactly once and checks
    /// it agrees with the scenario.
    ///
    /// A back-end with subtly different semantics (say, substring match
    /// where whole-haystack match was meant) would otherwise produce
    /// meaningless but fast numbers, so this must pass before
    /// [`Trial::measure`] runs.
    pub fn verify(&self) -> Result<(), Mismatch> {
        let observed = self.matcher.test(self.scenario.haystack.text());
        if observed != self.scenario.expect {
            return Err(self.mismatch(observed));
        }
        debug!(
            "correctness gate passed for {}/{}",
            self.scenario.name, self.engine
        );
        Ok(())
    }

    /// Quiesces runtime noise sources before timing.
    ///
    /// Native targets have no collector to force and no tiered compiler to
    /// pin, so there is nothing to do; a managed embedding would hook its
    /// countermeasures in here rather than inside the loop.
    pub fn prepare(&self) {}

    /// Runs the matcher `nreps` times, re-checking the outcome on every
    /// iteration and aborting on the first disagreement.
    ///
    /// The body does nothing else: no allocation, no logging, one branch.
    /// Anything more would be measured as matcher cost. The check itself
    /// stays because a back-end with an input-size-triggered fallback path
    /// could flip answers mid-run, and samples taken after that point are
    /// untrustworthy.
    pub fn measure(&self, nreps: u64) -> Result<(), Mismatch> {
        let haystack = self.scenario.haystack.text();
        let expect = self.scenario.expect;
        for _ in 0..nreps {
            if black_box(self.matcher.test(black_box(haystack))) != expect {
                return Err(self.mismatch(!expect));
            }
        }
        Ok(())
    }

    fn mismatch(&self, observed: bool) -> Mismatch {
        Mismatch {
            scenario: self.scenario.name,
            engine: self.engine,
            expected: self.scenario.expect,
            observed,
        }
    }
}

/// Runs the whole pipeline for one pairing: compile, gate, prepare,
/// measure.
///
/// `nreps` comes from the caller (defaulting to 1000); the harness never
/// chooses repetition counts itself.
///
/// # Example
/// ```
/// use rx_arena::{engine::Engine, harness, scenario};
///
/// let scenarios = scenario::all();
/// harness::run()
///     .engine(Engine::Dense)
///     .scenario(&scenarios[1])
///     .nreps(10)
///     .call()?;
/// # Ok::<(), rx_arena::harness::Error>(())
/// ```
#[builder]
pub fn run(
    engine: Engine,
    scenario: &Scenario,
    #[builder(default = 1000)] nreps: u64,
) -> Result<(), Error> {
    let trial = Trial::new(engine, scenario)?;
    trial.verify()?;
    trial.prepare();
    trial.measure(nreps)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crate::scenario::{self, Haystack, Scenario};

    use super::*;

    #[test]
    fn backends_agree_on_every_scenario() {
        for scenario in scenario::all() {
            for &engine in Engine::ALL {
                let trial = Trial::new(engine, &scenario).unwrap();
                trial.verify().unwrap_or_else(|err| {
                    panic!("{}/{engine}: {err}", scenario.name)
                });
            }
        }
    }

    #[test]
    fn loop_agrees_with_gate_on_short_haystacks() {
        for scenario in scenario::all() {
            if !matches!(scenario.haystack, Haystack::Literal(_)) {
                continue;
            }
            for &engine in Engine::ALL {
                let trial = Trial::new(engine, &scenario).unwrap();
                trial.verify().unwrap();
                trial.prepare();
                trial.measure(1000).unwrap_or_else(|err| {
                    panic!("{}/{engine}: {err}", scenario.name)
                });
            }
        }
    }

    #[test]
    fn loop_agrees_with_gate_on_the_long_corpus() {
        // Fewer reps here: the NFA engines scan 832 KiB per iteration.
        for scenario in scenario::all() {
            if scenario.haystack != Haystack::LongData {
                continue;
            }
            for &engine in Engine::ALL {
                let trial = Trial::new(engine, &scenario).unwrap();
                trial.verify().unwrap();
                trial.measure(5).unwrap_or_else(|err| {
                    panic!("{}/{engine}: {err}", scenario.name)
                });
            }
        }
    }

    #[test]
    fn gate_failure_stops_the_trial() {
        let wrong = Scenario::builder()
            .name("wrong_expectation")
            .pattern(".*y")
            .haystack(Haystack::Literal("xxxy"))
            .expect(false)
            .build();
        let err = run()
            .engine(Engine::PikeVm)
            .scenario(&wrong)
            .call()
            .unwrap_err();
        match err {
            Error::Mismatch(m) => {
                assert_eq!(m.scenario, "wrong_expectation");
                assert_eq!(m.engine, Engine::PikeVm);
                assert!(!m.expected);
                assert!(m.observed);
            }
            other => panic!("expected a mismatch, got {other:?}"),
        }
    }

    #[test]
    fn build_failure_stops_the_trial() {
        let bad = Scenario::builder()
            .name("bad_pattern")
            .pattern("a(b")
            .haystack(Haystack::Literal("ab"))
            .expect(false)
            .build();
        for &engine in Engine::ALL {
            let err = run().engine(engine).scenario(&bad).call().unwrap_err();
            assert!(matches!(err, Error::Build(_)), "{engine}");
        }
    }

    #[test]
    fn pathological_scenario_stays_bounded() {
        let scenarios = scenario::all();
        let pathological = scenarios
            .iter()
            .find(|s| s.name == "pathological_backtracking")
            .unwrap();
        let start = Instant::now();
        for &engine in Engine::ALL {
            run()
                .engine(engine)
                .scenario(pathological)
                .nreps(100)
                .call()
                .unwrap();
        }
        // Any engine that actually backtracked exponentially would blow
        // far past this.
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn run_defaults_to_a_thousand_reps() {
        let scenarios = scenario::all();
        let literal =
            scenarios.iter().find(|s| s.name == "literal").unwrap();
        run().engine(Engine::Dense).scenario(literal).call().unwrap();
    }
}
