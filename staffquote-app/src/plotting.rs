//! This module renders the visual artifacts for a computed quote.

use anyhow::Result;
use plotters::prelude::*;
use staffquote_core::{
    catalog::Catalog,
    quote::{
        engine::compute_quote,
        resolve::{MAX_SEATS, MIN_SEATS},
    },
};
use staffquote_schemas::{benchmark::RoleBenchmark, quote::Quote};

/// The main function to generate and save all charts for a run.
pub fn generate_all_plots(output_dir: &str, quote: &Quote, catalog: &Catalog) -> Result<()> {
    println!("[Plotting] Generating quote graphs...");

    plot_range_comparison(output_dir, quote)?;
    plot_team_cost_curve(output_dir, quote, catalog)?;

    println!("[Plotting] Graphs have been saved to '{}'.", output_dir);
    Ok(())
}

/// Bar chart comparing the US and Latin America compensation ranges for the
/// quoted role.
fn plot_range_comparison(output_dir: &str, quote: &Quote) -> Result<()> {
    let path = format!("{}/1_range_comparison.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = quote.us_range.max.max(quote.latin_range.max) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Compensation Benchmark: {}", quote.role),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0i32..4i32, 0f64..max_value)?;

    chart
        .configure_mesh()
        .y_desc("Annual compensation (USD)")
        .x_labels(4)
        .x_label_formatter(&|idx| {
            match *idx {
                0 => "US min",
                1 => "US max",
                2 => "LatAm min",
                3 => "LatAm max",
                _ => "",
            }
            .to_string()
        })
        .draw()?;

    let bars = [
        (0, quote.us_range.min as f64, BLUE),
        (1, quote.us_range.max as f64, BLUE),
        (2, quote.latin_range.min as f64, GREEN),
        (3, quote.latin_range.max as f64, GREEN),
    ];
    for (x, value, color) in bars {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x, 0.0), (x + 1, value)],
            color.mix(0.6).filled(),
        )))?;
    }

    // Average markers across each market's pair of bars
    chart
        .draw_series(LineSeries::new(
            [(0, quote.us_avg), (2, quote.us_avg)],
            BLUE.stroke_width(2),
        ))?
        .label("US avg")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));
    chart
        .draw_series(LineSeries::new(
            [(2, quote.latin_avg), (4, quote.latin_avg)],
            GREEN.stroke_width(2),
        ))?
        .label("Latin America avg")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Line chart of total team cost per year across the allowed seat range,
/// with the requested seat count marked.
fn plot_team_cost_curve(output_dir: &str, quote: &Quote, catalog: &Catalog) -> Result<()> {
    let path = format!("{}/2_team_cost.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let model = catalog.model(quote.model);
    let benchmark = RoleBenchmark {
        role: quote.role.clone(),
        us_range: quote.us_range,
        latin_range: quote.latin_range,
    };

    let series: Vec<(u32, f64)> = (MIN_SEATS..=MAX_SEATS)
        .map(|seats| (seats, compute_quote(&benchmark, seats, model).team_annual))
        .collect();
    let max_cost = series.last().map_or(1.0, |(_, cost)| *cost) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Team Cost: {} ({})", quote.role, model.label),
            ("sans-serif", 40).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(MIN_SEATS..MAX_SEATS + 1, 0f64..max_cost)?;

    chart
        .configure_mesh()
        .x_desc("Seats")
        .y_desc("Total annual cost (USD)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(series, BLUE.stroke_width(2)))?
        .label("Team annual cost")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            (quote.seats, quote.team_annual),
            5,
            RED.filled(),
        )))?
        .label(format!("Requested: {} seats", quote.seats))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
