//! Splitting a full name into given name and surname.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub surname: String,
    pub given_name: String,
}

/// Guess the surname and given name in `full_name`.
///
/// Digits are ignored. With one word it is the given name. With two words the
/// longer one is taken as the surname when it comes first and is not
/// hyphenated; otherwise the second word is the surname. With three or more
/// words the last one is the surname and the rest form the given name.
pub fn split_full_name(full_name: &str) -> PersonName {
    let cleaned: String = full_name.chars().filter(|c| !c.is_ascii_digit()).collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    match words.as_slice() {
        [] => PersonName::default(),
        [single] => PersonName {
            surname: String::new(),
            given_name: single.to_string(),
        },
        [first, second] => {
            let first_is_surname =
                first.chars().count() > second.chars().count() && !first.contains('-');
            let (surname, given_name) = if first_is_surname {
                (first, second)
            } else {
                (second, first)
            };
            PersonName {
                surname: surname.to_string(),
                given_name: given_name.to_string(),
            }
        }
        [given @ .., last] => PersonName {
            surname: last.to_string(),
            given_name: given.join(" "),
        },
    }
}
