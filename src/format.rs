//! Representation-specific display strings and manual-edit parsing.

use crate::controls::ControlError;
use crate::property::Representation;

/// Renders a raw property value the way its representation wants it shown.
///
/// MAC and IPv4 addresses are taken from the low 48/32 bits of the value,
/// most significant octet first.
pub fn format_value(value: i64, representation: Representation) -> String {
    match representation {
        Representation::HexNumber => format!("0x{:04X}", value),
        Representation::MacAddress => {
            let v = value as u64;
            format!(
                "{}:{}:{}:{}:{}:{}",
                (v >> 40) & 0xFF,
                (v >> 32) & 0xFF,
                (v >> 24) & 0xFF,
                (v >> 16) & 0xFF,
                (v >> 8) & 0xFF,
                v & 0xFF
            )
        }
        Representation::IP4Address => {
            let v = value as u64;
            format!(
                "{}.{}.{}.{}",
                (v >> 24) & 0xFF,
                (v >> 16) & 0xFF,
                (v >> 8) & 0xFF,
                v & 0xFF
            )
        }
        _ => value.to_string(),
    }
}

/// Parses user-typed text according to the representation's format.
///
/// The error carries the offending input; the caller is expected to revert
/// the edit field to the last known-good display string.
pub fn parse_value(text: &str, representation: Representation) -> Result<i64, ControlError> {
    let trimmed = text.trim();

    let parsed = match representation {
        Representation::HexNumber => {
            let digits = trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
                .unwrap_or(trimmed);
            // u64 so that full-width two's complement strings stay parseable
            u64::from_str_radix(digits, 16).ok().map(|v| v as i64)
        }
        Representation::MacAddress => parse_octets(trimmed, ':', 6).map(|v| v as i64),
        Representation::IP4Address => parse_octets(trimmed, '.', 4).map(|v| v as i64),
        _ => trimmed.parse::<i64>().ok(),
    };

    parsed.ok_or_else(|| ControlError::Parse {
        input: text.to_string(),
        representation,
    })
}

fn parse_octets(text: &str, separator: char, count: usize) -> Option<u64> {
    let parts: Vec<&str> = text.split(separator).collect();
    if parts.len() != count {
        return None;
    }

    let mut packed: u64 = 0;
    for part in parts {
        let octet: u8 = part.trim().parse().ok()?;
        packed = (packed << 8) | u64::from(octet);
    }

    Some(packed)
}
