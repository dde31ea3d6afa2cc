//! T9 multi-tap text entry
//!
//! Each digit key carries a fixed set of letters. Pressing a key either
//! appends its first letter or cycles the last character through the set.

use heapless::String;

/// Candidate characters per digit key, lowercase
pub const T9_KEYS: [&str; 10] = [
    " ",      // 0
    ".,?!'-", // 1
    "abc",    // 2
    "def",    // 3
    "ghi",    // 4
    "jkl",    // 5
    "mno",    // 6
    "pqrs",   // 7
    "tuv",    // 8
    "wxyz",   // 9
];

/// Candidate set for a digit, `None` for anything outside 0..=9
pub fn candidates(digit: u8) -> Option<&'static str> {
    T9_KEYS.get(digit as usize).copied()
}

/// Whether `ch` is one of the characters on key `digit`
///
/// Letters match in either case.
pub fn matches(ch: char, digit: u8) -> bool {
    match candidates(digit) {
        Some(set) => set.contains(ch.to_ascii_lowercase()),
        None => false,
    }
}

/// Apply one key press to the text being typed
///
/// With `new_symbol` set, or with an empty buffer, the first candidate is
/// appended and the flag cleared. Otherwise the last character is replaced
/// by the candidate following it on this key, wrapping around; a last
/// character from another key is replaced by this key's first candidate.
///
/// Digits outside 0..=9 change nothing. When the buffer is full no
/// character is appended and the flag is left alone.
pub fn apply_keypress<const N: usize>(digit: u8, text: &mut String<N>, new_symbol: &mut bool) {
    let Some(set) = candidates(digit) else {
        return;
    };
    let mut letters = set.chars();
    let Some(first) = letters.next() else {
        return;
    };

    if *new_symbol || text.is_empty() {
        if text.push(first).is_ok() {
            *new_symbol = false;
        }
        return;
    }

    let Some(last) = text.pop() else {
        return;
    };
    let last = last.to_ascii_lowercase();

    let next = match set.chars().position(|c| c == last) {
        Some(i) => set.chars().cycle().nth(i + 1).unwrap_or(first),
        None => first,
    };
    // Popping freed at least one byte and every candidate is ASCII
    let _ = text.push(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Text = String<32>;

    fn typed(keys: &[(u8, bool)]) -> Text {
        let mut text = Text::new();
        let mut new_symbol = false;
        for &(digit, arm) in keys {
            if arm {
                new_symbol = true;
            }
            apply_keypress(digit, &mut text, &mut new_symbol);
        }
        text
    }

    #[test]
    fn test_first_press_appends_first_candidate() {
        let mut text = Text::new();
        let mut new_symbol = false;
        apply_keypress(2, &mut text, &mut new_symbol);
        assert_eq!(text.as_str(), "a");
        assert!(!new_symbol);
    }

    #[test]
    fn test_repeated_press_cycles() {
        assert_eq!(typed(&[(2, false), (2, false)]).as_str(), "b");
        assert_eq!(typed(&[(2, false), (2, false), (2, false)]).as_str(), "c");
        assert_eq!(
            typed(&[(2, false), (2, false), (2, false), (2, false)]).as_str(),
            "a"
        );
    }

    #[test]
    fn test_seven_and_nine_have_four_letters() {
        let keys = [(7, false); 4];
        assert_eq!(typed(&keys).as_str(), "s");
        let keys = [(9, false); 5];
        assert_eq!(typed(&keys).as_str(), "w");
    }

    #[test]
    fn test_new_symbol_appends() {
        let mut text = Text::new();
        let mut new_symbol = false;
        apply_keypress(4, &mut text, &mut new_symbol);
        apply_keypress(4, &mut text, &mut new_symbol);
        new_symbol = true;
        apply_keypress(4, &mut text, &mut new_symbol);
        assert_eq!(text.as_str(), "hg");
        assert!(!new_symbol);
    }

    #[test]
    fn test_other_key_replaces_last_character() {
        // Multi-tap without a commit keeps a single character
        assert_eq!(typed(&[(2, false), (3, false)]).as_str(), "d");
        assert_eq!(typed(&[(2, false), (3, true)]).as_str(), "ad");
    }

    #[test]
    fn test_uppercase_last_character_cycles() {
        let mut text = Text::try_from("A").unwrap();
        let mut new_symbol = false;
        apply_keypress(2, &mut text, &mut new_symbol);
        assert_eq!(text.as_str(), "b");
    }

    #[test]
    fn test_zero_and_one_keys() {
        assert_eq!(typed(&[(0, false)]).as_str(), " ");
        assert_eq!(typed(&[(0, false), (0, false)]).as_str(), " ");
        assert_eq!(typed(&[(1, false), (1, false), (1, false)]).as_str(), "?");
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut text = Text::try_from("ab").unwrap();
        let mut new_symbol = true;
        apply_keypress(10, &mut text, &mut new_symbol);
        assert_eq!(text.as_str(), "ab");
        assert!(new_symbol);
    }

    #[test]
    fn test_full_buffer_keeps_flag() {
        let mut text: String<2> = String::try_from("ab").unwrap();
        let mut new_symbol = true;
        apply_keypress(3, &mut text, &mut new_symbol);
        assert_eq!(text.as_str(), "ab");
        assert!(new_symbol);

        // Cycling still works in place
        new_symbol = false;
        apply_keypress(2, &mut text, &mut new_symbol);
        assert_eq!(text.as_str(), "ac");
    }

    #[test]
    fn test_matches() {
        for (digit, set) in T9_KEYS.iter().enumerate() {
            for ch in set.chars() {
                for case in [ch, ch.to_ascii_uppercase()] {
                    for other in 0..=9u8 {
                        assert_eq!(
                            matches(case, other),
                            other as usize == digit,
                            "{case:?} on key {other}"
                        );
                    }
                    assert!(!matches(case, 10));
                }
            }
        }
        assert!(!matches('7', 7));
        assert!(!matches('\u{e9}', 3));
    }

    proptest! {
        #[test]
        fn test_cycle_returns_to_start(digit in 0u8..10, prefix in "[a-z]{0,5}") {
            let mut text = Text::try_from(prefix.as_str()).unwrap();
            let mut new_symbol = true;
            apply_keypress(digit, &mut text, &mut new_symbol);
            let start = text.clone();
            let period = candidates(digit).unwrap().chars().count();
            for _ in 0..period {
                apply_keypress(digit, &mut text, &mut new_symbol);
            }
            prop_assert_eq!(text, start);
        }

        #[test]
        fn test_press_keeps_length_without_new_symbol(
            digit in 0u8..10,
            prefix in "[a-z]{1,8}",
        ) {
            let mut text = Text::try_from(prefix.as_str()).unwrap();
            let mut new_symbol = false;
            apply_keypress(digit, &mut text, &mut new_symbol);
            prop_assert_eq!(text.len(), prefix.len());
            prop_assert_eq!(&text[..prefix.len() - 1], &prefix[..prefix.len() - 1]);
            let last = text.chars().last().unwrap();
            prop_assert!(matches(last, digit));
        }
    }
}
