//! The deterministic input corpus shared by every benchmark scenario.
//!
//! Nothing here depends on randomness, locale or environment: regenerating
//! any fixture yields byte-identical data, so results stay comparable
//! run-to-run and back-end-to-back-end.

use std::sync::LazyLock;

/// The block [`long_haystack`] is built from.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// How many times [`ALPHABET`] is repeated in [`long_haystack`].
pub const LONG_REPEAT: usize = 1 << 15;

/// Fifty `x`s then a `y`, the classic `.*y` haystack.
pub const X50Y: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxy";

/// Eighty `x`s then a `w`, for the trailing-character-class scenarios.
pub const X80W: &str = "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx\
                        xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxw";

/// Eighty `b`s then a `c`. `b` sits between `a` and `c`, so range checks on
/// a class like `[ac]` get no early-out help from the haystack.
pub const B80C: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb\
                        bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbc";

/// Twenty-four `a`s, paired with the pathological `a?{24}a{24}` pattern.
pub const A24: &str = "aaaaaaaaaaaaaaaaaaaaaaaa";

static LONG_HAYSTACK: LazyLock<String> =
    LazyLock::new(|| ALPHABET.repeat(LONG_REPEAT));

/// The large synthetic haystack: [`ALPHABET`] repeated [`LONG_REPEAT`]
/// times, exactly `26 << 15` bytes.
///
/// Big enough that per-call overhead disappears into scan time, so the
/// long-corpus scenarios measure a back-end's stepping cost rather than its
/// call setup. Built on first use and kept for the lifetime of the process;
/// every caller sees the same allocation.
pub fn long_haystack() -> &'static str {
    &LONG_HAYSTACK
}
