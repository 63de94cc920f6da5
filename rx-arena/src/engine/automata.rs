//! The `regex-automata` back-ends.
//!
//! All six engines compile from the same anchored HIR. The DFA family
//! (dense, sparse) and the lazy DFA disable capture tracking up front, since
//! DFAs cannot support it anyway; the NFA engines keep the default implicit
//! group. Engines that search through a scratch `Cache` keep a pool of them
//! so [`Matcher::test`] stays `&self`.

use std::{
    panic::{RefUnwindSafe, UnwindSafe},
    sync::Arc,
};

use regex_automata::{
    dfa::{dense, Automaton},
    hybrid, meta,
    nfa::thompson::{self, backtrack, pikevm::PikeVM, WhichCaptures, NFA},
    util::pool::Pool,
    Input,
};

use crate::engine::{syntax, BuildError, Matcher};

type CachePoolFn<C> =
    Box<dyn Fn() -> C + Send + Sync + UnwindSafe + RefUnwindSafe>;
type CachePool<C> = Pool<C, CachePoolFn<C>>;

fn nfa(pattern: &str, captures: WhichCaptures) -> Result<NFA, BuildError> {
    let hir = syntax::parse_full_match(pattern)?;
    let nfa = thompson::Compiler::new()
        .configure(thompson::Config::new().which_captures(captures))
        .build_from_hir(&hir)?;
    Ok(nfa)
}

pub(crate) fn meta(pattern: &str) -> Result<Box<dyn Matcher>, BuildError> {
    let hir = syntax::parse_full_match(pattern)?;
    let re = meta::Regex::builder().build_from_hir(&hir)?;
    Ok(Box::new(MetaMatcher { re }))
}

struct MetaMatcher {
    re: meta::Regex,
}

impl Matcher for MetaMatcher {
    #[inline]
    fn test(&self, haystack: &str) -> bool {
        self.re.is_match(haystack)
    }
}

pub(crate) fn dense(pattern: &str) -> Result<Box<dyn Matcher>, BuildError> {
    let dfa = dense_dfa(pattern)?;
    Ok(Box::new(DfaMatcher { dfa }))
}

pub(crate) fn sparse(pattern: &str) -> Result<Box<dyn Matcher>, BuildError> {
    let dfa = dense_dfa(pattern)?.to_sparse()?;
    Ok(Box::new(DfaMatcher { dfa }))
}

fn dense_dfa(pattern: &str) -> Result<dense::DFA<Vec<u32>>, BuildError> {
    let nfa = nfa(pattern, WhichCaptures::None)?;
    Ok(dense::Builder::new().build_from_nfa(&nfa)?)
}

/// A fully built DFA, dense or sparse. Only a forward automaton is needed:
/// `test` wants match presence, not offsets.
struct DfaMatcher<A> {
    dfa: A,
}

impl<A: Automaton + Send + Sync> Matcher for DfaMatcher<A> {
    #[inline]
    fn test(&self, haystack: &str) -> bool {
        // No quit bytes are configured, so the search cannot fail.
        self.dfa
            .try_search_fwd(&Input::new(haystack))
            .unwrap()
            .is_some()
    }
}

pub(crate) fn hybrid(pattern: &str) -> Result<Box<dyn Matcher>, BuildError> {
    let nfa = nfa(pattern, WhichCaptures::None)?;
    let dfa = Arc::new(hybrid::dfa::DFA::builder().build_from_nfa(nfa)?);
    let pool = {
        let dfa = Arc::clone(&dfa);
        let create: CachePoolFn<hybrid::dfa::Cache> =
            Box::new(move || dfa.create_cache());
        Pool::new(create)
    };
    Ok(Box::new(HybridMatcher { dfa, pool }))
}

struct HybridMatcher {
    dfa: Arc<hybrid::dfa::DFA>,
    pool: CachePool<hybrid::dfa::Cache>,
}

impl Matcher for HybridMatcher {
    #[inline]
    fn test(&self, haystack: &str) -> bool {
        let mut cache = self.pool.get();
        // The default lazy-DFA config clears its cache rather than giving
        // up, and no quit bytes are configured, so the search cannot fail.
        self.dfa
            .try_search_fwd(&mut cache, &Input::new(haystack))
            .unwrap()
            .is_some()
    }
}

pub(crate) fn pikevm(pattern: &str) -> Result<Box<dyn Matcher>, BuildError> {
    let nfa = nfa(pattern, WhichCaptures::Implicit)?;
    let re = Arc::new(PikeVM::builder().build_from_nfa(nfa)?);
    let pool = {
        let re = Arc::clone(&re);
        let create: CachePoolFn<thompson::pikevm::Cache> =
            Box::new(move || re.create_cache());
        Pool::new(create)
    };
    Ok(Box::new(PikeVmMatcher { re, pool }))
}

struct PikeVmMatcher {
    re: Arc<PikeVM>,
    pool: CachePool<thompson::pikevm::Cache>,
}

impl Matcher for PikeVmMatcher {
    #[inline]
    fn test(&self, haystack: &str) -> bool {
        let mut cache = self.pool.get();
        self.re.is_match(&mut cache, haystack)
    }
}

pub(crate) fn backtrack(
    pattern: &str,
) -> Result<Box<dyn Matcher>, BuildError> {
    let nfa = nfa(pattern, WhichCaptures::Implicit)?;
    let re = Arc::new(
        backtrack::BoundedBacktracker::builder()
            .configure(
                backtrack::Config::new().visited_capacity(usize::MAX / 8),
            )
            .build_from_nfa(nfa)?,
    );
    let pool = {
        let re = Arc::clone(&re);
        let create: CachePoolFn<backtrack::Cache> =
            Box::new(move || re.create_cache());
        Pool::new(create)
    };
    Ok(Box::new(BacktrackMatcher { re, pool }))
}

struct BacktrackMatcher {
    re: Arc<backtrack::BoundedBacktracker>,
    pool: CachePool<backtrack::Cache>,
}

impl Matcher for BacktrackMatcher {
    #[inline]
    fn test(&self, haystack: &str) -> bool {
        let mut cache = self.pool.get();
        // The visited capacity is effectively unbounded, so the haystack
        // length limit cannot be hit.
        self.re.try_is_match(&mut cache, haystack).unwrap()
    }
}
