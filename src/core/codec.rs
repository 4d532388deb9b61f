//! Conversions between HHMMSS digit buffers, signed second counts and
//! `HH:MM:SS` display strings.

/// Width of a fully typed buffer (HHMMSS).
pub const BUFFER_DIGITS: usize = 6;

/// Decompose a signed second count into `(negative, hours, minutes, seconds)`.
/// Hours are not wrapped at 24 or 100.
pub fn split(total: i64) -> (bool, u64, u64, u64) {
    let abs = total.unsigned_abs();
    (total < 0, abs / 3600, (abs % 3600) / 60, abs % 60)
}

/// Parse a digit buffer into signed seconds.
///
/// Everything but digits and a single leading `-` is ignored. The last four
/// digits are MMSS, any digits before them are hours, so a 6-digit buffer
/// splits as HH/MM/SS and longer compact strings keep their hours intact.
/// Empty input, a bare `-` or an overflowing digit run yield 0.
pub fn parse(buffer: &str) -> i64 {
    let trimmed = buffer.trim_start();
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return 0;
    }

    let padded = if digits.len() < BUFFER_DIGITS {
        format!("{digits:0>width$}", width = BUFFER_DIGITS)
    } else {
        digits
    };

    let split_at = padded.len() - 4;
    let (hh, mmss) = padded.split_at(split_at);
    let (mm, ss) = mmss.split_at(2);

    let total = hh.parse::<i64>().ok().and_then(|h| {
        let m = mm.parse::<i64>().ok()?;
        let s = ss.parse::<i64>().ok()?;
        h.checked_mul(3600)?.checked_add(m * 60 + s)
    });

    match total {
        Some(t) if negative => -t,
        Some(t) => t,
        None => 0,
    }
}

/// `[-]HH:MM:SS`
pub fn format(total: i64) -> String {
    let (negative, h, m, s) = split(total);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{h:02}:{m:02}:{s:02}")
}

/// `[-]HHMMSS`, the buffer form of a computed value.
pub fn format_compact(total: i64) -> String {
    let (negative, h, m, s) = split(total);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{h:02}{m:02}{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_short_buffers() {
        assert_eq!(parse("0"), 0);
        assert_eq!(parse("5"), 5);
        assert_eq!(parse("130"), 90);
        assert_eq!(parse("10000"), 3600);
        assert_eq!(parse("013045"), 3600 + 30 * 60 + 45);
    }

    #[test]
    fn parse_accepts_out_of_range_fields() {
        // "99" seconds is taken at face value, not normalised
        assert_eq!(parse("99"), 99);
        assert_eq!(parse("9999"), 99 * 60 + 99);
    }

    #[test]
    fn parse_handles_sign_and_noise() {
        assert_eq!(parse("-010000"), -3600);
        assert_eq!(parse("01:30:00"), 5400);
        assert_eq!(parse("-"), 0);
        assert_eq!(parse(""), 0);
        assert_eq!(parse("abc"), 0);
        assert_eq!(parse("1-0"), 10);
    }

    #[test]
    fn parse_keeps_long_hour_fields() {
        assert_eq!(parse("1000000"), 100 * 3600);
        assert_eq!(parse("12345959"), 1234 * 3600 + 59 * 60 + 59);
    }

    #[test]
    fn parse_overflow_is_zero() {
        assert_eq!(parse("99999999999999999999999999"), 0);
    }

    #[test]
    fn format_variants() {
        assert_eq!(format(0), "00:00:00");
        assert_eq!(format(3661), "01:01:01");
        assert_eq!(format(-5400), "-01:30:00");
        assert_eq!(format(360_000), "100:00:00");
        assert_eq!(format_compact(5400), "013000");
        assert_eq!(format_compact(-45), "-000045");
        assert_eq!(format_compact(360_000 + 61), "1000101");
    }

    #[test]
    fn compact_round_trip() {
        let samples = (-400_000..=400_000).step_by(997).chain([
            0,
            1,
            -1,
            59,
            3599,
            3600,
            86_399,
            359_999,
            360_000,
            -360_000,
            3_600_000,
            i32::MAX as i64,
        ]);
        for s in samples {
            assert_eq!(parse(&format_compact(s)), s, "round trip failed for {s}");
        }
    }
}
