use staffquote_schemas::{
    benchmark::{CompRange, RoleBenchmark},
    engagement::EngagementModel,
    quote::Quote,
};

/// Range averages and the savings between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Savings {
    pub us_avg: f64,
    pub latin_avg: f64,
    pub amount: f64,
    pub pct: i64,
}

/// Compares the two market ranges. The percentage is rounded to the nearest
/// integer and zero when the US average is zero.
pub fn savings(us_range: &CompRange, latin_range: &CompRange) -> Savings {
    let us_avg = us_range.midpoint();
    let latin_avg = latin_range.midpoint();
    let amount = us_avg - latin_avg;
    let pct = if us_avg > 0.0 {
        (amount / us_avg * 100.0).round() as i64
    } else {
        0
    };
    Savings {
        us_avg,
        latin_avg,
        amount,
        pct,
    }
}

/// Derives the full set of quote figures from a resolved benchmark, a
/// sanitized seat count, and an engagement model.
///
/// Pure and total: for catalog-invariant inputs (max >= min >= 0,
/// 0 < fee_pct < 1) every figure is finite, and identical inputs always
/// yield identical output.
pub fn compute_quote(benchmark: &RoleBenchmark, seats: u32, model: &EngagementModel) -> Quote {
    let comparison = savings(&benchmark.us_range, &benchmark.latin_range);
    let annual_service = (comparison.latin_avg * model.fee_pct).round();
    // The service fee is rounded once; the per-seat total is not rounded
    // again on top of it.
    let total_per_seat = comparison.latin_avg + annual_service;
    let team_annual = total_per_seat * seats as f64;

    Quote {
        role: benchmark.role.clone(),
        seats,
        model: model.key,
        us_range: benchmark.us_range,
        latin_range: benchmark.latin_range,
        us_avg: comparison.us_avg,
        latin_avg: comparison.latin_avg,
        savings: comparison.amount,
        savings_pct: comparison.pct,
        annual_service,
        total_per_seat,
        team_annual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use staffquote_schemas::engagement::ModelKey;

    fn benchmark(us_min: u32, us_max: u32, latin_min: u32, latin_max: u32) -> RoleBenchmark {
        RoleBenchmark {
            role: "Test Role".to_string(),
            us_range: CompRange::new(us_min, us_max),
            latin_range: CompRange::new(latin_min, latin_max),
        }
    }

    #[test]
    fn sdr_fully_managed_three_seats() {
        let catalog = Catalog::builtin();
        let sdr = catalog.benchmark("SDR / BDR").unwrap();
        let model = catalog.model(ModelKey::FullyManaged);

        let quote = compute_quote(sdr, 3, model);
        assert_eq!(quote.us_avg, 70_000.0);
        assert_eq!(quote.latin_avg, 31_500.0);
        assert_eq!(quote.savings, 38_500.0);
        assert_eq!(quote.savings_pct, 55);
        assert_eq!(quote.annual_service, 11_025.0);
        assert_eq!(quote.total_per_seat, 42_525.0);
        assert_eq!(quote.team_annual, 127_575.0);
    }

    #[test]
    fn averages_are_non_negative_for_valid_ranges() {
        let result = savings(&CompRange::new(0, 0), &CompRange::new(0, 10));
        assert!(result.us_avg >= 0.0);
        assert!(result.latin_avg >= 0.0);
    }

    #[test]
    fn zero_us_average_yields_zero_percent() {
        let result = savings(&CompRange::new(0, 0), &CompRange::new(10_000, 20_000));
        assert_eq!(result.pct, 0);
        assert_eq!(result.amount, -15_000.0);
    }

    #[test]
    fn savings_may_be_negative_when_latin_range_is_higher() {
        let quote = compute_quote(
            &benchmark(40_000, 50_000, 60_000, 70_000),
            1,
            Catalog::builtin().model(ModelKey::RecruitOnly),
        );
        assert_eq!(quote.savings, -20_000.0);
        assert_eq!(quote.savings_pct, -44);
    }

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        // 41000 / 72500 = 56.55..% -> 57
        let result = savings(&CompRange::new(65_000, 80_000), &CompRange::new(28_000, 35_000));
        assert_eq!(result.us_avg, 72_500.0);
        assert_eq!(result.pct, 57);
    }

    #[test]
    fn computation_is_idempotent() {
        let catalog = Catalog::builtin();
        let role = catalog.benchmark("Data Analyst").unwrap();
        let model = catalog.model(ModelKey::RecruitOnly);

        let first = compute_quote(role, 12, model);
        let second = compute_quote(role, 12, model);
        assert_eq!(first, second);
    }
}
