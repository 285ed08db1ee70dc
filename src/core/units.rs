use once_cell::sync::Lazy;
use regex::Regex;

// Size literal grammar: digits, a unit letter, optional `i` suffix.
static SIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([0-9]+)([kmgt])i?$").unwrap());

// Cpu literal grammar: decimal cores ("0.5", "2") or integer millicores ("100m").
static CPU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)?)(m?)$").unwrap());

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;

/// Convert a size literal such as `512Mi` or `2G` into an exact byte count.
///
/// Multipliers are binary (1024-based) whether or not the `i` suffix is
/// present; `1M` and `1Mi` are the same quantity. Anything outside the
/// grammar, including an overflowing product, yields `0` — callers must treat
/// `0` as "unparseable" and report their own error.
pub fn parse_memory_size(literal: &str) -> u64 {
    let caps = match SIZE_RE.captures(literal.trim()) {
        Some(caps) => caps,
        None => return 0,
    };

    let value = match caps[1].parse::<u64>() {
        Ok(value) => value,
        Err(_) => return 0,
    };

    let multiplier = match caps[2].to_ascii_uppercase().as_str() {
        "K" => KIB,
        "M" => MIB,
        "G" => GIB,
        "T" => TIB,
        // Unreachable while the grammar and this table list the same units.
        _ => return 0,
    };

    value.checked_mul(multiplier).unwrap_or(0)
}

/// Convert a cpu units literal into millicores: `"100m"` -> 100,
/// `"0.5"` -> 500, `"2"` -> 2000. Same convention as [`parse_memory_size`]:
/// `0` means the literal did not parse.
pub fn parse_cpu_units(literal: &str) -> u32 {
    let caps = match CPU_RE.captures(literal.trim()) {
        Some(caps) => caps,
        None => return 0,
    };

    if &caps[2] == "m" {
        // Millicore form takes whole numbers only.
        if caps[1].contains('.') {
            return 0;
        }
        return caps[1].parse::<u32>().unwrap_or(0);
    }

    let cores = match caps[1].parse::<f64>() {
        Ok(cores) => cores,
        Err(_) => return 0,
    };

    let millis = cores * 1000.0;
    if !millis.is_finite() || millis > f64::from(u32::MAX) {
        return 0;
    }
    millis.round() as u32
}
