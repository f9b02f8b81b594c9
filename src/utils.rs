//! Formatting helpers for console reports.

use std::fmt::Write;
use std::time::Duration;

use crate::comparator::Summary;

/// Format a duration with a unit suited to its magnitude.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    if total_seconds >= 60 {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;
        return format!("{}h {:02}m {:02}s", hours, minutes, seconds);
    }

    let micros = duration.as_micros();
    if micros >= 1_000_000 {
        format!("{:.3}s", duration.as_secs_f64())
    } else if micros >= 1_000 {
        format!("{:.3}ms", micros as f64 / 1_000.0)
    } else {
        format!("{}us", micros)
    }
}

/// Render a batch comparison as a plain-text report.
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();

    for comparison in &summary.comparisons {
        let _ = writeln!(
            out,
            "Instance #{} ({})",
            comparison.instance_index + 1,
            comparison.instance_name
        );
        for result in &comparison.results {
            let marker = if result.algorithm == comparison.winner {
                "*"
            } else {
                " "
            };
            let _ = writeln!(
                out,
                " {} {:<10} cost {:>10.2}  time {:>10}  stops {}",
                marker,
                result.algorithm.tag(),
                result.cost,
                format_duration(result.elapsed),
                result.route.len()
            );
        }
        let _ = writeln!(out, "   winner: {}", comparison.winner);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Batch Summary:");
    for algorithm in &summary.algorithms {
        let _ = writeln!(
            out,
            "- {:<10} runs {:>3}  wins {:>3}  avg cost {:>10.2}  avg time {}",
            algorithm.algorithm.tag(),
            algorithm.runs,
            algorithm.wins,
            algorithm.average_cost,
            format_duration(algorithm.average_time)
        );
    }
    if let Some(winner) = summary.overall_winner() {
        let _ = writeln!(out, "Overall: {}", winner);
    }

    out
}
