#[cfg(test)]
#[path = "../../tests/unit/solution/report_test.rs"]
mod report_test;

use super::Assignment;
use crate::formulation::ConstraintModel;
use crate::utils::InfoLogger;
use std::fmt::Write;

/// Formats a human readable summary: objective, dropped nodes and every route with its
/// visit times and loads, route time and distance, and totals.
pub fn format_solution_summary(model: &ConstraintModel, assignment: &Assignment) -> Vec<String> {
    let to_km = |distance: i64| distance as f64 * model.distance_unit_m / 1000.;

    let mut lines = vec![format!("Objective: {}", assignment.objective)];

    let dropped = assignment.dropped.iter().fold(String::from("Dropped nodes:"), |mut acc, node| {
        let _ = write!(acc, " {node}");
        acc
    });
    lines.push(dropped);

    assignment.routes.iter().for_each(|route| {
        let vessel = model.vehicles.get(route.vehicle).map_or("", |vehicle| vehicle.id.as_str());
        let mut route_line = String::new();

        let (last, visits) = match route.visits.split_last() {
            Some(split) => split,
            None => return,
        };

        visits.iter().for_each(|visit| {
            let _ = write!(route_line, "{} Time({}) Load({}) -> ", visit.node, visit.time, visit.load);
        });
        let _ = write!(route_line, "{} Time({})", last.node, last.time);

        lines.push(format!("Route for {vessel}:"));
        lines.push(route_line);
        lines.push(format!("Time of the route: {}min", route.end_time()));
        lines.push(format!("Distance of the route: {} km", to_km(route.distance())));
    });

    lines.push(format!("Total time of all routes: {}min", assignment.total_time()));
    lines.push(format!("Total distance of all routes: {} km", to_km(assignment.total_distance())));

    lines
}

/// Logs a human readable solution summary.
pub fn log_solution_summary(model: &ConstraintModel, assignment: &Assignment, logger: &InfoLogger) {
    format_solution_summary(model, assignment).iter().for_each(|line| (logger)(line.as_str()));
}
