//! Report rendering
//!
//! JSON keeps NaN sentinels as `null`; the text table prints them as `N/A`.

use std::fmt::Write as _;
use std::io::Write;

use pricer_models::analytical::GreekName;
use pricer_models::instruments::PayoffPoint;

use crate::valuation::{ImpliedVolReport, ValuationReport};
use crate::Result;

/// Placeholder for values that could not be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Pretty-printed JSON report.
pub fn to_json(report: &ValuationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Formats `value` with `precision` decimals, or `N/A` when not finite.
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", precision, value)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Two-column text table of inputs and results.
pub fn render_table(report: &ValuationReport) -> String {
    let inputs = &report.inputs;
    let results = &report.results;
    let mut rows: Vec<(String, String)> = Vec::new();

    if let Some(ticker) = &inputs.ticker {
        rows.push(("Ticker".into(), ticker.clone()));
    }
    rows.push(("Option type".into(), inputs.option_type.to_string()));
    rows.push(("Spot".into(), format_value(inputs.spot, 4)));
    rows.push(("Strike".into(), format_value(inputs.strike, 4)));
    rows.push(("Valuation date".into(), inputs.valuation_date.to_string()));
    if let Some(maturity) = inputs.maturity {
        rows.push(("Maturity".into(), maturity.to_string()));
    }
    rows.push(("Expiry (years)".into(), format_value(inputs.expiry, 6)));
    rows.push(("Rate".into(), format_value(inputs.rate, 6)));
    rows.push(("Dividend yield".into(), format_value(inputs.dividend_yield, 6)));
    rows.push((
        format!("Volatility ({:?})", inputs.volatility_source).to_lowercase(),
        format_value(inputs.volatility, 6),
    ));
    let separator = rows.len();

    rows.push(("BS price".into(), format_value(results.analytic.price, 4)));
    for (name, value) in results.analytic.greeks.iter() {
        let precision = if name == GreekName::Gamma { 6 } else { 4 };
        rows.push((name.as_str().to_string(), format_value(value, precision)));
    }

    let mc = &results.monte_carlo;
    rows.push(("MC price".into(), format_value(mc.price, 4)));
    rows.push(("MC std error".into(), format_value(mc.std_error, 4)));
    rows.push(("MC paths x steps".into(), format!("{} x {}", mc.n_paths, mc.n_steps)));

    if let Some(market_price) = inputs.market_price {
        rows.push(("Market price".into(), format_value(market_price, 4)));
    }
    match &results.implied_volatility {
        Some(ImpliedVolReport::Solved { volatility }) => {
            rows.push(("Implied vol".into(), format_value(*volatility, 6)));
        }
        Some(ImpliedVolReport::Failed { reason, .. }) => {
            rows.push(("Implied vol".into(), format!("{} ({})", NOT_AVAILABLE, reason)));
        }
        None => {}
    }

    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |left: char, mid: char, right: char| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('┌', '┬', '┐'));
    for (i, (key, value)) in rows.iter().enumerate() {
        if i == separator {
            let _ = writeln!(out, "{}", rule('├', '┼', '┤'));
        }
        let _ = writeln!(
            out,
            "│ {:<kw$} │ {:>vw$} │",
            key,
            value,
            kw = key_width,
            vw = value_width
        );
    }
    let _ = writeln!(out, "{}", rule('└', '┴', '┘'));
    out
}

/// Writes payoff points as CSV with a `terminal_spot,payoff` header.
pub fn write_payoff_csv<W: Write>(points: &[PayoffPoint], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in points {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}
