//! Device fingerprint derived from client environment attributes.

use serde::{Deserialize, Serialize};

/// Client-reported environment attributes.
///
/// Every field is optional on the wire; missing values hash as empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientEnvironment {
    /// Browser or client user agent.
    pub user_agent: String,
    /// Screen width in pixels.
    pub screen_width: u32,
    /// Screen height in pixels.
    pub screen_height: u32,
    /// Color depth in bits.
    pub color_depth: u32,
    /// IANA timezone name.
    pub timezone: String,
}

impl ClientEnvironment {
    /// The canonical `ua|WxH|depth|tz` string that gets hashed.
    pub fn canonical(&self) -> String {
        format!(
            "{}|{}x{}|{}|{}",
            self.user_agent, self.screen_width, self.screen_height, self.color_depth, self.timezone
        )
    }

    /// Hashes the canonical string into a fingerprint.
    pub fn fingerprint(&self) -> String {
        fingerprint_of(&self.canonical())
    }
}

/// 32-bit rolling hash (`h = h * 31 + unit`) over the UTF-16 code units of
/// `input`, rendered as signed lowercase hex.
pub fn fingerprint_of(input: &str) -> String {
    let hash = input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    signed_hex(hash)
}

fn signed_hex(value: i32) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{value:x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hashes() {
        assert_eq!(fingerprint_of(""), "0");
        assert_eq!(fingerprint_of("a"), "61");
        assert_eq!(fingerprint_of("ab"), "c21");
    }

    #[test]
    fn test_negative_rendered_with_sign() {
        assert_eq!(signed_hex(-1), "-1");
        assert_eq!(signed_hex(-255), "-ff");
        assert_eq!(signed_hex(i32::MIN), "-80000000");
    }

    #[test]
    fn test_hash_wraps_on_long_input() {
        let long = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36".repeat(10);
        let fp = fingerprint_of(&long);
        assert!(fp.trim_start_matches('-').len() <= 8);
        assert_eq!(fp, fingerprint_of(&long));
    }

    #[test]
    fn test_canonical_layout() {
        let env = ClientEnvironment {
            user_agent: "ua".to_string(),
            screen_width: 1920,
            screen_height: 1080,
            color_depth: 24,
            timezone: "Europe/Berlin".to_string(),
        };
        assert_eq!(env.canonical(), "ua|1920x1080|24|Europe/Berlin");
        assert_ne!(env.fingerprint(), ClientEnvironment::default().fingerprint());
    }

    #[test]
    fn test_deserializes_partial_camel_case() {
        let env: ClientEnvironment =
            serde_json::from_str(r#"{"screenWidth": 800, "timezone": "UTC"}"#).expect("parse");
        assert_eq!(env.screen_width, 800);
        assert!(env.user_agent.is_empty());
    }
}
