//! English cardinal words for wait durations (`three`, `twenty-one`).

use thiserror::Error;

/// The text was not a recognizable English cardinal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a recognized number word")]
pub struct NumberWordError(pub String);

/// Converts an English cardinal to its value.
///
/// Case-insensitive. Covers zero through ninety-nine; compounds may be
/// hyphenated (`twenty-one`) or space-separated (`forty five`).
pub fn word_to_number(text: &str) -> Result<u64, NumberWordError> {
    let normalized = text.trim().to_lowercase();
    let parts: Vec<&str> = normalized
        .split(['-', ' '])
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [single] => unit_value(single)
            .or_else(|| tens_value(single))
            .ok_or_else(|| NumberWordError(text.to_string())),
        [tens, unit] => {
            let tens = tens_value(tens).ok_or_else(|| NumberWordError(text.to_string()))?;
            let unit = unit_value(unit)
                .filter(|value| (1..=9).contains(value))
                .ok_or_else(|| NumberWordError(text.to_string()))?;
            Ok(tens + unit)
        }
        _ => Err(NumberWordError(text.to_string())),
    }
}

fn unit_value(word: &str) -> Option<u64> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens_value(word: &str) -> Option<u64> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::word_to_number;

    #[test]
    fn single_words() {
        assert_eq!(word_to_number("three").unwrap(), 3);
        assert_eq!(word_to_number("twelve").unwrap(), 12);
        assert_eq!(word_to_number("twenty").unwrap(), 20);
    }

    #[test]
    fn compound_words() {
        assert_eq!(word_to_number("twenty-one").unwrap(), 21);
        assert_eq!(word_to_number("Forty five").unwrap(), 45);
        assert_eq!(word_to_number("ninety-nine").unwrap(), 99);
    }

    #[test]
    fn rejects_non_cardinals() {
        assert!(word_to_number("several").is_err());
        assert!(word_to_number("").is_err());
        assert!(word_to_number("twenty twelve").is_err());
        assert!(word_to_number("one hundred and one").is_err());
    }
}
