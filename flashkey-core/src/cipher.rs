//! Caesar shift cipher for the secret-decoder widget.
//!
//! Only ASCII letters are shifted; case is preserved and everything else
//! passes through untouched, so `decode(encode(s, k), k) == s` for any
//! input string and key.

/// Largest meaningful key; shifting by 26 is the identity.
pub const MAX_KEY: u8 = 25;

fn shift_letter(ch: char, amount: u8) -> char {
    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
    let rotated = (ch as u8 - base + amount) % 26 + base;
    rotated as char
}

fn shift(text: &str, amount: u8) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                shift_letter(ch, amount)
            } else {
                ch
            }
        })
        .collect()
}

/// Encode `text` by rotating letters forward by `key` positions.
#[must_use]
pub fn encode(text: &str, key: u8) -> String {
    shift(text, key % 26)
}

/// Decode a message produced by [`encode`] with the same key.
#[must_use]
pub fn decode(text: &str, key: u8) -> String {
    shift(text, 26 - key % 26)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_shift_three() {
        assert_eq!(encode("Attack at dawn", 3), "Dwwdfn dw gdzq");
        assert_eq!(decode("Dwwdfn dw gdzq", 3), "Attack at dawn");
    }

    #[test]
    fn round_trips_for_every_key() {
        let message = "The Quick Brown Fox, 1984 (jumps?)";
        for key in 1..=MAX_KEY {
            assert_eq!(decode(&encode(message, key), key), message, "key {key}");
        }
    }

    #[test]
    fn wraps_around_the_alphabet() {
        assert_eq!(encode("xyz XYZ", 3), "abc ABC");
        assert_eq!(decode("abc ABC", 3), "xyz XYZ");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(encode("12:34 !?", 7), "12:34 !?");
        assert_eq!(encode("привет", 5), "привет");
    }

    #[test]
    fn key_is_reduced_modulo_alphabet() {
        assert_eq!(encode("abc", 26), "abc");
        assert_eq!(encode("abc", 27), encode("abc", 1));
        assert_eq!(decode("abc", 26), "abc");
    }
}
