//! Pattern-based string generator for contact and ID fields.
//!
//! Supports placeholders:
//! - `{rand:N}` - random N-digit number without a leading zero
//! - `{digits:N}` - N random digits, leading zeros allowed
//! - `{letter}` - random uppercase ASCII letter
//! - `{sex}` - `1` for male, `2` for female
//!
//! Unknown placeholders are kept verbatim.

use health_core::Gender;
use rand::Rng;

/// Fill every placeholder in `pattern`.
pub fn fill_pattern<R: Rng>(pattern: &str, rng: &mut R, gender: Gender) -> String {
    let mut result = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len;

        result.push_str(&rest[..start]);
        match expand_placeholder(&rest[start + 1..end], rng, gender) {
            Some(value) => result.push_str(&value),
            None => result.push_str(&rest[start..=end]),
        }
        rest = &rest[end + 1..];
    }

    result.push_str(rest);
    result
}

fn expand_placeholder<R: Rng>(token: &str, rng: &mut R, gender: Gender) -> Option<String> {
    if let Some(n) = token.strip_prefix("rand:") {
        return n.parse().ok().map(|n| random_number(rng, n));
    }
    if let Some(n) = token.strip_prefix("digits:") {
        return n.parse().ok().map(|n| random_digits(rng, n));
    }
    match token {
        "letter" => Some(char::from(rng.random_range(b'A'..=b'Z')).to_string()),
        "sex" => Some(
            match gender {
                Gender::Male => "1",
                Gender::Female => "2",
            }
            .to_string(),
        ),
        _ => None,
    }
}

/// Generate a random number with exactly N digits.
fn random_number<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(char::from(rng.random_range(b'1'..=b'9')));
    result.push_str(&random_digits(rng, digits - 1));
    result
}

fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    (0..digits)
        .map(|_| char::from(rng.random_range(b'0'..=b'9')))
        .collect()
}
