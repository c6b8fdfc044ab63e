use staffquote_core::{catalog::Catalog, quote::engine};
use staffquote_schemas::{engagement::EngagementModel, quote::Quote};

/// Formats whole US dollars with thousands separators, no cents.
pub fn currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

pub fn print_summary(quote: &Quote, model: &EngagementModel) {
    println!("\n\n--- [Quote Summary] ---");
    println!("========================================");
    println!("Role:  {}", quote.role);
    println!(
        "Seats: {} | Model: {} ({})",
        quote.seats, model.label, model.fee_note
    );
    println!("----------------------------------------");
    println!(
        "US Range:              {} - {}",
        currency(quote.us_range.min as f64),
        currency(quote.us_range.max as f64)
    );
    println!(
        "Latin America Range:   {} - {}",
        currency(quote.latin_range.min as f64),
        currency(quote.latin_range.max as f64)
    );
    println!("US Avg:                {}", currency(quote.us_avg));
    println!("Latin America Avg:     {}", currency(quote.latin_avg));
    println!(
        "Estimated Savings:     {} ({}% vs US)",
        currency(quote.savings),
        quote.savings_pct
    );
    println!("----------------------------------------");
    println!(
        "Service ({:.0}%):         {}",
        model.fee_pct * 100.0,
        currency(quote.annual_service)
    );
    println!("Total / seat / year:   {}", currency(quote.total_per_seat));
    println!(
        "Total team ({} seats):  {}",
        quote.seats,
        currency(quote.team_annual)
    );
    println!("========================================");
}

/// Renders the benchmark catalog as a markdown comparison table.
pub fn comparison_table(catalog: &Catalog) -> String {
    let mut table =
        String::from("| Role | US Range | Latin America Range | Savings vs US |\n");
    table.push_str("|------|----------|---------------------|---------------|\n");

    for benchmark in catalog.benchmarks() {
        let comparison = engine::savings(&benchmark.us_range, &benchmark.latin_range);
        table.push_str(&format!(
            "| {} | {} - {} | {} - {} | ~{}% |\n",
            benchmark.role,
            currency(benchmark.us_range.min as f64),
            currency(benchmark.us_range.max as f64),
            currency(benchmark.latin_range.min as f64),
            currency(benchmark.latin_range.max as f64),
            comparison.pct
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(950.0), "$950");
        assert_eq!(currency(31_500.0), "$31,500");
        assert_eq!(currency(1_234_567.0), "$1,234,567");
        assert_eq!(currency(-20_000.0), "-$20,000");
    }

    #[test]
    fn currency_rounds_to_whole_dollars() {
        assert_eq!(currency(11_024.6), "$11,025");
        assert_eq!(currency(999.5), "$1,000");
    }

    #[test]
    fn table_lists_every_catalog_role() {
        let catalog = Catalog::builtin();
        let table = comparison_table(&catalog);
        for benchmark in catalog.benchmarks() {
            assert!(table.contains(&benchmark.role));
        }
        // SDR / BDR: (70000 - 31500) / 70000 = 55%
        assert!(table.contains("| SDR / BDR | $60,000 - $80,000 | $28,000 - $35,000 | ~55% |"));
    }
}
