//! Compound growth projection
//!
//! Simulates monthly-compounded growth of a principal plus fixed monthly
//! contributions. The simulation is explicitly month-by-month rather than a
//! closed-form annuity: each month the balance grows first, then the
//! contribution lands, so a given month's contribution only starts earning
//! interest the following month.
//!
//! Monetary values stay in f64 for the whole simulation; rounding to currency
//! precision is a display concern.

/// One emitted point in the projection series, one per elapsed year
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionPoint {
    /// Display label ("Year 1", "Year 2", ...)
    pub label: String,
    /// Principal plus all contributions made so far
    pub total_contributed: f64,
    /// Growth beyond the contributed amount at this point
    pub interest_earned: f64,
}

/// Result of a projection run
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Year-by-year series
    pub points: Vec<ProjectionPoint>,
    /// Principal plus every contribution
    pub total_invested: f64,
    /// Final amount minus total invested
    pub total_interest: f64,
    /// Ending balance
    pub final_amount: f64,
}

impl Projection {
    /// Simulate compound growth
    ///
    /// Returns `None` when no projection is possible: non-positive rate, zero
    /// years, or any non-finite input. This is a defined outcome, not an
    /// error.
    pub fn simulate(
        principal: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        years: u32,
    ) -> Option<Self> {
        if !principal.is_finite()
            || !monthly_contribution.is_finite()
            || !annual_rate_percent.is_finite()
            || annual_rate_percent <= 0.0
            || years == 0
        {
            return None;
        }

        let monthly_rate = annual_rate_percent / 100.0 / 12.0;
        let total_months = years * 12;

        let mut future_value = principal;
        let mut total_contributed = principal;
        let mut points = Vec::with_capacity(years as usize);

        for month in 1..=total_months {
            // Growth first, then the new contribution lands
            future_value *= 1.0 + monthly_rate;
            future_value += monthly_contribution;
            total_contributed += monthly_contribution;

            if month % 12 == 0 || month == total_months {
                let year = (month + 11) / 12;
                points.push(ProjectionPoint {
                    label: format!("Year {}", year),
                    total_contributed,
                    interest_earned: future_value - total_contributed,
                });
            }
        }

        Some(Self {
            points,
            total_invested: total_contributed,
            total_interest: future_value - total_contributed,
            final_amount: future_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_invalid_inputs_yield_none() {
        assert!(Projection::simulate(1000.0, 100.0, 0.0, 10).is_none());
        assert!(Projection::simulate(1000.0, 100.0, -5.0, 10).is_none());
        assert!(Projection::simulate(1000.0, 100.0, 8.0, 0).is_none());
        assert!(Projection::simulate(f64::NAN, 100.0, 8.0, 10).is_none());
        assert!(Projection::simulate(1000.0, f64::INFINITY, 8.0, 10).is_none());
    }

    #[test]
    fn test_pure_compound_growth_matches_closed_form() {
        // With no contributions the simulation reduces to p * (1 + r/12)^(12y)
        let p = 10_000.0;
        let rate = 6.0;
        let years = 5;
        let projection = Projection::simulate(p, 0.0, rate, years).unwrap();

        let expected = p * (1.0 + rate / 100.0 / 12.0).powi(years as i32 * 12);
        assert!((projection.final_amount - expected).abs() < EPS);
        assert!((projection.total_invested - p).abs() < EPS);
    }

    #[test]
    fn test_total_contributed_is_exact() {
        let projection = Projection::simulate(1_000.0, 250.0, 8.0, 3).unwrap();
        assert!((projection.total_invested - (1_000.0 + 250.0 * 36.0)).abs() < EPS);
    }

    #[test]
    fn test_one_point_per_year() {
        let projection = Projection::simulate(1_000.0, 100.0, 8.0, 7).unwrap();
        assert_eq!(projection.points.len(), 7);
        assert_eq!(projection.points[0].label, "Year 1");
        assert_eq!(projection.points[6].label, "Year 7");
    }

    #[test]
    fn test_grow_then_add_ordering() {
        // One month at 12% annual (1% monthly): 1000 grows to 1010, then the
        // 200 contribution lands without earning anything yet.
        let projection = Projection::simulate(1_000.0, 200.0, 12.0, 1).unwrap();

        let mut fv = 1_000.0;
        for _ in 0..12 {
            fv *= 1.01;
            fv += 200.0;
        }
        assert!((projection.final_amount - fv).abs() < EPS);
    }

    #[test]
    fn test_concrete_scenario() {
        // principal=1000, contribution=200, 8% annual, 1 year. With
        // grow-then-add ordering the ending balance is
        //   p*f^12 + pmt*(f^12 - 1)/(f - 1)  where f = 1 + 0.08/12,
        // about 3573 — each contribution earns interest only from the month
        // after it lands.
        let projection = Projection::simulate(1_000.0, 200.0, 8.0, 1).unwrap();

        let f: f64 = 1.0 + 0.08 / 12.0;
        let expected = 1_000.0 * f.powi(12) + 200.0 * (f.powi(12) - 1.0) / (f - 1.0);
        assert!((projection.final_amount - expected).abs() < EPS);
        assert!((projection.final_amount - 3_573.0).abs() < 1.0);
        assert!((projection.total_invested - 3_400.0).abs() < EPS);
        assert!(
            (projection.total_interest - (projection.final_amount - 3_400.0)).abs() < EPS
        );
    }

    #[test]
    fn test_points_are_consistent_with_summary() {
        let projection = Projection::simulate(5_000.0, 150.0, 10.0, 4).unwrap();
        let last = projection.points.last().unwrap();
        assert!((last.total_contributed - projection.total_invested).abs() < EPS);
        assert!((last.interest_earned - projection.total_interest).abs() < EPS);
    }

    #[test]
    fn test_deterministic() {
        let a = Projection::simulate(2_000.0, 75.0, 9.5, 10).unwrap();
        let b = Projection::simulate(2_000.0, 75.0, 9.5, 10).unwrap();
        assert_eq!(a, b);
    }
}
