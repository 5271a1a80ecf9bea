//! Meter test-token helpers.
//!
//! Test tokens are 20 decimal digits; the last digit is a Luhn check digit
//! over the first 19. The backend generates tokens, the client re-verifies
//! the check digit before showing one to an operator (a corrupted token
//! typed into a meter keypad is rejected only after a truck roll).

use anyhow::{bail, Result};

/// Token length in digits, check digit included.
pub const TOKEN_LEN: usize = 20;

const GROUP_LEN: usize = 4;

/// Strip the separators a human (or the backend) may have inserted.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Luhn check digit for a payload of decimal digits.
pub fn check_digit(payload: &str) -> Result<char> {
    if payload.is_empty() || !payload.chars().all(|c| c.is_ascii_digit()) {
        bail!("token payload must be non-empty decimal digits");
    }
    let mut sum = 0u32;
    // Rightmost payload digit is doubled (it sits next to the check digit).
    for (i, c) in payload.chars().rev().enumerate() {
        let mut d = c.to_digit(10).expect("digits checked above");
        if i % 2 == 0 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    let check = (10 - (sum % 10)) % 10;
    Ok(char::from_digit(check, 10).expect("single decimal digit"))
}

/// Verify a full token: exactly [`TOKEN_LEN`] digits with a valid check digit.
pub fn verify(raw: &str) -> Result<()> {
    let token = normalize(raw);
    if token.len() != TOKEN_LEN {
        bail!(
            "token must be {} digits, got {}",
            TOKEN_LEN,
            token.len()
        );
    }
    if !token.chars().all(|c| c.is_ascii_digit()) {
        bail!("token contains non-digit characters");
    }
    let (payload, check) = token.split_at(TOKEN_LEN - 1);
    let expected = check_digit(payload)?;
    if check.chars().next() != Some(expected) {
        bail!("token check digit mismatch");
    }
    Ok(())
}

/// Format a token the way it is printed on vend slips: 4-digit groups.
pub fn group(raw: &str) -> String {
    let token = normalize(raw);
    token
        .as_bytes()
        .chunks(GROUP_LEN)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Classic Luhn vector: payload 7992739871 -> check digit 3.
    #[test]
    fn test_known_check_digit() {
        assert_eq!(check_digit("7992739871").unwrap(), '3');
    }

    fn valid_token() -> String {
        let payload = "1234567890123456789";
        let check = check_digit(payload).unwrap();
        format!("{payload}{check}")
    }

    #[test]
    fn test_verify_accepts_valid_token() {
        assert!(verify(&valid_token()).is_ok());
    }

    #[test]
    fn test_verify_accepts_grouped_input() {
        let grouped = group(&valid_token());
        assert!(verify(&grouped).is_ok());
    }

    #[test]
    fn test_verify_rejects_corrupted_digit() {
        let mut token = valid_token();
        // Flip the first digit.
        let first = token.remove(0);
        let flipped = if first == '9' { '0' } else { (first as u8 + 1) as char };
        token.insert(0, flipped);
        assert!(verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_length() {
        assert!(verify("1234").is_err());
    }

    #[test]
    fn test_grouping() {
        assert_eq!(
            group("12345678901234567890"),
            "1234 5678 9012 3456 7890"
        );
    }
}
