//! Time-based one-time passcodes for the MFA challenge.

use totp_rs::{Algorithm, Secret, TOTP};

/// Build the generator the gateway's challenge expects: 6 digits,
/// SHA-1, 30 second step, base32 shared secret.
fn generator(secret: &str) -> Result<TOTP, String> {
    let bytes = Secret::Encoded(secret.trim().to_string())
        .to_bytes()
        .map_err(|e| format!("TOTP secret is not valid base32: {e:?}"))?;

    TOTP::new(Algorithm::SHA1, 6, 1, 30, bytes).map_err(|e| format!("TOTP secret rejected: {e:?}"))
}

/// Current 6-digit passcode for the shared secret.
pub fn current(secret: &str) -> Result<String, String> {
    let totp = generator(secret)?;
    totp.generate_current()
        .map_err(|e| format!("system clock error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 6238 test secret: "12345678901234567890" in base32.
    const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

    fn at(secret: &str, time: u64) -> Result<String, String> {
        Ok(generator(secret)?.generate(time))
    }

    #[test]
    fn test_rfc_6238_vectors() {
        assert_eq!(at(RFC_SECRET, 59).unwrap(), "287082");
        assert_eq!(at(RFC_SECRET, 1111111109).unwrap(), "081804");
        assert_eq!(at(RFC_SECRET, 1234567890).unwrap(), "005924");
    }

    #[test]
    fn test_secret_is_trimmed() {
        // Portals display the secret with stray whitespace around it.
        let padded = format!("  {RFC_SECRET}\n");
        assert_eq!(at(&padded, 59).unwrap(), "287082");
    }

    #[test]
    fn test_invalid_secret_is_an_error() {
        let err = current("not base32 !!!").expect_err("bad secret must not generate a code");
        assert!(err.contains("base32"), "got: {}", err);
    }

    #[test]
    fn test_current_code_has_six_digits() {
        let code = current(RFC_SECRET).expect("should generate");
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()), "got: {}", code);
    }
}
