/*!
## Mono case
The "mono" case mappings in this module are the single-char lowercase and
uppercase mappings of a Unicode character: the same as
[`char::to_lowercase()`] and [`char::to_uppercase()`] in `std`, except that
mappings which expand to multiple characters keep only the first one ('İ'
lowercases to `i` instead of `i\u{307}`, 'ß' uppercases to `S` instead of
`SS`).

Characters without a mapping pass through unchanged, including anything that
is not a letter.
*/
use crate::Sealed;

pub trait CharCaseExt {
    /// The only multi-char lowercase mapping is 'İ' -> "i\u{307}"; the
    /// trailing '\u{307}' is dropped.
    ///
    /// See [mono case](self) for details.
    fn to_mono_lowercase(self) -> char;

    /// Multi-char uppercase mappings ('ß' -> "SS", the ligatures) keep the
    /// first char only.
    ///
    /// See [mono case](self) for details.
    fn to_mono_uppercase(self) -> char;
}

impl CharCaseExt for char {
    fn to_mono_lowercase(self) -> char {
        self.to_lowercase().next().unwrap()
    }

    fn to_mono_uppercase(self) -> char {
        self.to_uppercase().next().unwrap()
    }
}

pub trait StrCaseExt: Sealed {
    /// See [mono case](self) for details.
    fn to_mono_lowercase(&self) -> String;

    /// See [mono case](self) for details.
    fn to_mono_uppercase(&self) -> String;
}

impl StrCaseExt for str {
    fn to_mono_lowercase(&self) -> String {
        self.chars().map(|c| c.to_mono_lowercase()).collect()
    }

    fn to_mono_uppercase(&self) -> String {
        self.chars().map(|c| c.to_mono_uppercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!('A'.to_mono_lowercase(), 'a');
        assert_eq!('a'.to_mono_lowercase(), 'a');
        assert_eq!('a'.to_mono_uppercase(), 'A');
        assert_eq!('Z'.to_mono_uppercase(), 'Z');
    }

    #[test]
    fn greek() {
        assert_eq!('Σ'.to_mono_lowercase(), 'σ');
        assert_eq!('σ'.to_mono_uppercase(), 'Σ');
    }

    #[test]
    fn multi_char_mappings_keep_the_first_char() {
        assert_eq!('İ'.to_mono_lowercase(), 'i');
        assert_eq!('ß'.to_mono_uppercase(), 'S');
    }

    #[test]
    fn unmapped_chars_pass_through() {
        assert_eq!('!'.to_mono_lowercase(), '!');
        assert_eq!('!'.to_mono_uppercase(), '!');
        assert_eq!('う'.to_mono_lowercase(), 'う');
        assert_eq!('7'.to_mono_uppercase(), '7');
    }

    #[test]
    fn str_maps_char_by_char() {
        assert_eq!("La Vie EST drôle".to_mono_lowercase(), "la vie est drôle");
        assert_eq!("straße".to_mono_uppercase(), "STRASE");
    }
}
