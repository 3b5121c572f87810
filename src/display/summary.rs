//! Score and projection display formatting

use crate::engine::score::{
    ScoreBreakdown, DIVERSIFICATION_WEIGHT, EXPENSE_WEIGHT, SAVINGS_WEIGHT,
};
use crate::engine::Projection;

/// Label for a score band
fn score_band(total: u8) -> &'static str {
    match total {
        0..=39 => "Needs attention",
        40..=69 => "Getting there",
        _ => "Healthy",
    }
}

/// Format a score breakdown for terminal display
pub fn format_score(score: &ScoreBreakdown) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Zen Score: {}/100  ({})\n",
        score.total,
        score_band(score.total)
    ));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "  Savings rate     {:>3}/{:.0}\n",
        score.savings,
        SAVINGS_WEIGHT * 100.0
    ));
    output.push_str(&format!(
        "  Expense control  {:>3}/{:.0}\n",
        score.expense_control,
        EXPENSE_WEIGHT * 100.0
    ));
    output.push_str(&format!(
        "  Diversification  {:>3}/{:.0}\n",
        score.diversification,
        DIVERSIFICATION_WEIGHT * 100.0
    ));

    output
}

/// Format a projection series and summary for terminal display
pub fn format_projection(projection: &Projection, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:10} {:>16} {:>16} {:>16}\n",
        "Year", "Contributed", "Interest", "Balance"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for point in &projection.points {
        output.push_str(&format!(
            "{:10} {:>15} {:>15} {:>15}\n",
            point.label,
            format_amount(point.total_contributed, symbol),
            format_amount(point.interest_earned, symbol),
            format_amount(point.total_contributed + point.interest_earned, symbol)
        ));
    }

    output.push_str(&"-".repeat(62));
    output.push('\n');
    output.push_str(&format!(
        "Total invested: {}\n",
        format_amount(projection.total_invested, symbol)
    ));
    output.push_str(&format!(
        "Total interest: {}\n",
        format_amount(projection.total_interest, symbol)
    ));
    output.push_str(&format!(
        "Final amount:   {}\n",
        format_amount(projection.final_amount, symbol)
    ));

    output
}

/// Round an f64 amount to cents for display only
fn format_amount(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}
