use crate::formulation::{ConstraintModel, assemble_model};
use crate::models::Config;
use crate::models::problem::Dataset;
use crate::solution::Assignment;
use crate::solver::{InsertionSolver, RoutingSolver};
use crate::utils::Environment;
use std::sync::Arc;

pub fn create_test_solver() -> InsertionSolver {
    InsertionSolver::new(Arc::new(Environment::new_silent()))
}

/// Assembles a model and solves it with the reference solver.
pub fn solve_dataset_with(dataset: &Dataset, config: Config) -> (ConstraintModel, Option<Assignment>) {
    let model = assemble_model(dataset, config).unwrap();
    let assignment = create_test_solver().solve(&model);

    (model, assignment)
}

/// Returns node sequences of all routes.
pub fn get_route_nodes(assignment: &Assignment) -> Vec<Vec<usize>> {
    assignment.routes.iter().map(|route| route.visits.iter().map(|visit| visit.node).collect()).collect()
}

/// Checks that the assignment satisfies pairing, capacity, time, waiting and concurrency constraints.
pub fn check_assignment(model: &ConstraintModel, assignment: &Assignment) -> Result<(), String> {
    model.pairs.iter().try_for_each(|pair| {
        match (assignment.visit_of(pair.pickup), assignment.visit_of(pair.delivery)) {
            (None, None) => Ok(()),
            (Some(pickup), Some(delivery)) => {
                if assignment.vehicle_of(pair.pickup) != assignment.vehicle_of(pair.delivery) {
                    return Err(format!("pair {pair:?} is served by different vehicles"));
                }
                if pickup.distance > delivery.distance || pickup.time > delivery.time {
                    return Err(format!("pair {pair:?} is visited in wrong order"));
                }
                Ok(())
            }
            _ => Err(format!("pair {pair:?} is partially assigned")),
        }
    })?;

    assignment.routes.iter().try_for_each(|route| {
        let vehicle = &model.vehicles[route.vehicle];
        let (first, last) = (route.visits.first().unwrap(), route.visits.last().unwrap());

        if first.node != vehicle.start || last.node != vehicle.end {
            return Err(format!("route of {} has wrong terminals", vehicle.id));
        }

        if route.visits.iter().map(|visit| model.demand(visit.node)).sum::<i64>() != 0 {
            return Err(format!("route of {} has non zero demand sum", vehicle.id));
        }

        route.visits.iter().enumerate().try_for_each(|(idx, visit)| {
            let domain = match idx {
                0 => &vehicle.start_domain,
                _ if idx == route.visits.len() - 1 => &vehicle.end_domain,
                _ => &model.nodes[visit.node].time_domain,
            };

            if !domain.contains(visit.time) || visit.load < 0 || visit.load > vehicle.capacity {
                return Err(format!("visit {visit:?} of {} violates time or capacity", vehicle.id));
            }

            Ok(())
        })?;

        route.visits.windows(2).try_for_each(|visits| {
            let (prev, next) = (&visits[0], &visits[1]);
            let arrival = prev.time + model.transit_time(route.vehicle, prev.node, next.node);
            if next.time < arrival {
                return Err(format!("visit {next:?} of {} starts too early", vehicle.id));
            }
            if next.time - arrival > model.time_dimension.max_slack {
                return Err(format!("visit {next:?} of {} waits too long", vehicle.id));
            }
            Ok(())
        })
    })?;

    model.concurrency.iter().try_for_each(|group| {
        let intervals = assignment
            .routes
            .iter()
            .flat_map(|route| route.visits.iter())
            .filter_map(|visit| {
                group
                    .members
                    .iter()
                    .find(|(node, duration)| *node == visit.node && *duration > 0)
                    .map(|(_, duration)| (visit.time, visit.time + duration))
            })
            .collect::<Vec<_>>();

        intervals.iter().try_for_each(|&(start, _)| {
            let active =
                intervals.iter().filter(|&&(other_start, other_end)| other_start <= start && start < other_end);
            if active.count() > group.capacity {
                return Err(format!("site {} is overbooked at {start}", group.location));
            }
            Ok(())
        })
    })
}
