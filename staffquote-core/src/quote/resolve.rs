use staffquote_schemas::benchmark::{CompRange, RoleBenchmark};

pub const MIN_SEATS: u32 = 1;
pub const MAX_SEATS: u32 = 50;

/// Reference-market baseline assumed for roles we have no benchmark for.
pub const CUSTOM_US_RANGE: CompRange = CompRange { min: 70_000, max: 95_000 };

// Provisional multipliers mapping the baseline onto the Latin America pool.
// Not derived from market data; expected to be replaced when real numbers
// for the role exist.
pub const CUSTOM_LATIN_MIN_FACTOR: f64 = 0.45;
pub const CUSTOM_LATIN_MAX_FACTOR: f64 = 0.55;

/// Clamps a raw seat count into the allowed range.
pub fn clamp_seats(raw: i64) -> u32 {
    raw.clamp(MIN_SEATS as i64, MAX_SEATS as i64) as u32
}

/// Parses seat-count text. Non-numeric input defaults to the minimum;
/// numeric input is clamped.
pub fn parse_seats(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(raw) => clamp_seats(raw),
        Err(_) => MIN_SEATS,
    }
}

/// Builds a benchmark for a free-text role from the fixed baseline.
pub fn synthesize_benchmark(role: &str) -> RoleBenchmark {
    let latin_min = (CUSTOM_US_RANGE.min as f64 * CUSTOM_LATIN_MIN_FACTOR).round() as u32;
    let latin_max = (CUSTOM_US_RANGE.max as f64 * CUSTOM_LATIN_MAX_FACTOR).round() as u32;
    RoleBenchmark {
        role: role.trim().to_string(),
        us_range: CUSTOM_US_RANGE,
        latin_range: CompRange::new(latin_min, latin_max),
    }
}

/// Resolves the benchmark for a request: non-blank custom role text wins over
/// the catalog selection. Arbitrary text is accepted as a role name.
pub fn resolve_benchmark(custom_role: &str, selected: &RoleBenchmark) -> RoleBenchmark {
    if custom_role.trim().is_empty() {
        selected.clone()
    } else {
        synthesize_benchmark(custom_role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_are_clamped_at_both_ends() {
        assert_eq!(clamp_seats(0), 1);
        assert_eq!(clamp_seats(-5), 1);
        assert_eq!(clamp_seats(1), 1);
        assert_eq!(clamp_seats(3), 3);
        assert_eq!(clamp_seats(50), 50);
        assert_eq!(clamp_seats(999), 50);
    }

    #[test]
    fn seat_text_defaults_to_one_when_not_numeric() {
        assert_eq!(parse_seats("abc"), 1);
        assert_eq!(parse_seats(""), 1);
        assert_eq!(parse_seats("3.5"), 1);
        assert_eq!(parse_seats(" 7 "), 7);
        assert_eq!(parse_seats("999"), 50);
        assert_eq!(parse_seats("-5"), 1);
    }

    #[test]
    fn synthesized_benchmark_uses_fixed_heuristic() {
        let benchmark = synthesize_benchmark("Ops Lead");
        assert_eq!(benchmark.role, "Ops Lead");
        assert_eq!(benchmark.us_range, CompRange::new(70_000, 95_000));
        assert_eq!(benchmark.latin_range, CompRange::new(31_500, 52_250));
    }

    #[test]
    fn custom_role_text_wins_over_selection() {
        let selected = synthesize_benchmark("Catalog Role");
        let resolved = resolve_benchmark("  Ops Lead  ", &selected);
        assert_eq!(resolved.role, "Ops Lead");

        let fallback = resolve_benchmark("   ", &selected);
        assert_eq!(fallback, selected);
    }
}
