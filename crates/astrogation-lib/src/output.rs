//! Plain-text rendering for travel reports.

use std::fmt::Write;

use crate::travel::TravelReport;

/// Render a report as the multi-line summary shown to the crew and appended
/// to shared jump histories. Hours and parsecs are formatted to two decimal
/// places.
pub fn render_report(report: &TravelReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Route: {}", report.route_text);
    let _ = writeln!(out, "Time: {:.2} hours", report.travel_hours);
    let _ = writeln!(out, "Distance: {:.2} parsecs", report.parsecs);
    let _ = writeln!(out, "Difficulty: {}", report.dice);
    let _ = writeln!(out, "Plotting Rounds: {}", report.plotting_rounds);
    let _ = write!(out, "Fuel Consumption: {}", report.fuel_units);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::DifficultyTally;

    #[test]
    fn renders_two_decimal_places() {
        let report = TravelReport {
            travel_hours: 8.4,
            parsecs: 4200.0,
            dice: DifficultyTally {
                difficulty: 2,
                challenge: 0,
                boost: 3,
                setback: 1,
            },
            plotting_rounds: 4,
            fuel_units: 7,
            route_text: "Coruscant (L9) -> Corellia (M9)".to_string(),
        };

        let text = render_report(&report);
        assert!(text.contains("Time: 8.40 hours"));
        assert!(text.contains("Distance: 4200.00 parsecs"));
        assert!(text.contains("Difficulty: 2dd, 0cd, 3bd, 1sbd"));
        assert!(text.contains("Route: Coruscant (L9) -> Corellia (M9)"));
        assert!(text.ends_with("Fuel Consumption: 7"));
    }
}
