#[cfg(test)]
#[path = "../../tests/unit/solver/insertion_test.rs"]
mod insertion_test;

use super::{Occupancy, RoutingSolver, build_occupancy, schedule_route};
use crate::formulation::ConstraintModel;
use crate::models::{FirstSolutionStrategy, LocalSearchMetaheuristic};
use crate::solution::{Assignment, RouteAssignment, Visit};
use crate::utils::{Environment, Timer, parallel_collect};
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cmp::Ordering;
use std::sync::Arc;

/// A reference routing solver: builds an initial solution by pair insertion and improves it with
/// a seeded ruin and recreate descent. It honors every constraint of the model.
pub struct InsertionSolver {
    environment: Arc<Environment>,
}

impl InsertionSolver {
    /// Creates a new instance of `InsertionSolver`.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment }
    }
}

impl RoutingSolver for InsertionSolver {
    fn solve(&self, model: &ConstraintModel) -> Option<Assignment> {
        let search = &model.search;
        let logger = &self.environment.logger;
        let log = |msg: &str| {
            if search.log_search {
                (logger)(msg)
            }
        };

        let timer = Timer::start();

        let Some(mut state) = SearchState::new(model) else {
            log("cannot schedule vessels without any item: no solution");
            return None;
        };

        recreate(model, &mut state, search.first_solution_strategy);
        let mut best_cost = state.objective(model);
        log(&format!("initial solution: objective {best_cost}, unassigned items {}", state.unassigned.len()));

        let mut iterations = 0;
        if search.local_search_metaheuristic != LocalSearchMetaheuristic::Disabled {
            let mut rng = SmallRng::seed_from_u64(search.seed);

            while iterations < search.solution_limit && timer.elapsed_secs_as_float() < search.time_limit_secs {
                iterations += 1;

                let assigned = state.assigned_pairs(model);
                if assigned.is_empty() {
                    break;
                }

                let amount = rng.gen_range(1..=assigned.len().min(3));
                let ruined = assigned.choose_multiple(&mut rng, amount).copied().collect::<Vec<_>>();

                let mut candidate = state.clone();
                if !candidate.ruin(model, ruined.as_slice()) {
                    continue;
                }

                recreate(model, &mut candidate, search.first_solution_strategy);

                let cost = candidate.objective(model);
                if cost < best_cost {
                    log(&format!("iteration {iterations}: objective improved from {best_cost} to {cost}"));
                    best_cost = cost;
                    state = candidate;
                }
            }
        }

        log(&format!(
            "search is completed in {:.3}s, iterations: {iterations}, objective: {best_cost}",
            timer.elapsed_secs_as_float()
        ));

        Some(state.into_assignment(model))
    }
}

/// A mutable solution used during the search.
#[derive(Clone)]
struct SearchState {
    /// Node sequences per vehicle, from start to end.
    routes: Vec<Vec<usize>>,
    /// Scheduled visits per vehicle.
    schedules: Vec<Vec<Visit>>,
    /// Indices of pairs which are not assigned, in ascending order.
    unassigned: Vec<usize>,
}

/// A feasible insertion of a pair into a route.
struct Insertion {
    pair: usize,
    vehicle: usize,
    cost: i64,
    route: Vec<usize>,
    visits: Vec<Visit>,
}

impl SearchState {
    /// Creates a state with empty routes, returns `None` if some empty route is infeasible.
    fn new(model: &ConstraintModel) -> Option<Self> {
        let routes = model.vehicles.iter().map(|vehicle| vec![vehicle.start, vehicle.end]).collect::<Vec<_>>();

        let schedules = routes.iter().enumerate().try_fold(Vec::with_capacity(routes.len()), |mut acc, (idx, route)| {
            let occupancy = build_occupancy(model, &acc, None);
            acc.push(schedule_route(model, idx, route, &occupancy)?);
            Some(acc)
        })?;

        Some(Self { routes, schedules, unassigned: (0..model.pairs.len()).collect() })
    }

    fn objective(&self, model: &ConstraintModel) -> i64 {
        let distance =
            self.schedules.iter().filter_map(|visits| visits.last()).map(|visit| visit.distance).sum::<i64>();
        let penalty = self
            .unassigned
            .iter()
            .filter_map(|&pair_idx| model.pairs.get(pair_idx))
            .flat_map(|pair| [pair.pickup, pair.delivery])
            .filter_map(|node| model.drop_penalty(node))
            .sum::<i64>();

        distance + penalty
    }

    fn assigned_pairs(&self, model: &ConstraintModel) -> Vec<usize> {
        (0..model.pairs.len()).filter(|pair_idx| self.unassigned.binary_search(pair_idx).is_err()).collect()
    }

    fn apply(&mut self, insertion: Insertion) {
        self.routes[insertion.vehicle] = insertion.route;
        self.schedules[insertion.vehicle] = insertion.visits;
        self.unassigned.retain(|&pair_idx| pair_idx != insertion.pair);
    }

    /// Removes pairs from their routes and reschedules affected routes.
    fn ruin(&mut self, model: &ConstraintModel, pairs: &[usize]) -> bool {
        let nodes = pairs
            .iter()
            .filter_map(|&pair_idx| model.pairs.get(pair_idx))
            .flat_map(|pair| [pair.pickup, pair.delivery])
            .collect::<Vec<_>>();

        let affected = self
            .routes
            .iter_mut()
            .enumerate()
            .filter_map(|(vehicle, route)| {
                let original = route.len();
                let last = original.saturating_sub(1);
                let mut position = 0;
                route.retain(|node| {
                    let keep = position == 0 || position == last || !nodes.contains(node);
                    position += 1;
                    keep
                });

                (route.len() != original).then_some(vehicle)
            })
            .collect::<Vec<_>>();

        self.unassigned.extend_from_slice(pairs);
        self.unassigned.sort_unstable();
        self.unassigned.dedup();

        affected.into_iter().all(|vehicle| {
            let occupancy = build_occupancy(model, &self.schedules, Some(vehicle));
            match schedule_route(model, vehicle, &self.routes[vehicle], &occupancy) {
                Some(visits) => {
                    self.schedules[vehicle] = visits;
                    true
                }
                None => false,
            }
        })
    }

    fn into_assignment(self, model: &ConstraintModel) -> Assignment {
        let objective = self.objective(model);

        let mut dropped = self
            .unassigned
            .iter()
            .filter_map(|&pair_idx| model.pairs.get(pair_idx))
            .flat_map(|pair| [pair.pickup, pair.delivery])
            .collect::<Vec<_>>();
        dropped.sort_unstable();

        let routes = self
            .schedules
            .into_iter()
            .enumerate()
            .map(|(vehicle, visits)| RouteAssignment { vehicle, visits })
            .collect();

        Assignment { routes, dropped, objective }
    }
}

/// Inserts unassigned pairs using given strategy until no feasible insertion is left.
fn recreate(model: &ConstraintModel, state: &mut SearchState, strategy: FirstSolutionStrategy) {
    match strategy {
        FirstSolutionStrategy::Sequential => {
            let pairs = state.unassigned.clone();
            pairs.into_iter().for_each(|pair_idx| {
                let occupancies = build_occupancies(model, state);
                if let Some(insertion) = find_best_insertion(model, state, &occupancies, pair_idx) {
                    state.apply(insertion);
                }
            });
        }
        FirstSolutionStrategy::Automatic | FirstSolutionStrategy::CheapestInsertion => loop {
            let snapshot: &SearchState = state;
            let occupancies = build_occupancies(model, snapshot);
            let best = parallel_collect(snapshot.unassigned.as_slice(), |&pair_idx| {
                find_best_insertion(model, snapshot, &occupancies, pair_idx)
            })
            .into_iter()
            .flatten()
            .min_by(|a, b| compare_insertions(a, b));

            match best {
                Some(insertion) => state.apply(insertion),
                None => break,
            }
        },
    }
}

fn build_occupancies(model: &ConstraintModel, state: &SearchState) -> Vec<Occupancy> {
    (0..state.schedules.len()).map(|vehicle| build_occupancy(model, &state.schedules, Some(vehicle))).collect()
}

fn compare_insertions(a: &Insertion, b: &Insertion) -> Ordering {
    (a.cost, a.pair, a.vehicle).cmp(&(b.cost, b.pair, b.vehicle))
}

/// Finds the cheapest feasible insertion of the pair: the pickup goes before the delivery on the
/// same route. Candidates are ordered by distance increase, so the first feasible one is the best.
fn find_best_insertion(
    model: &ConstraintModel,
    state: &SearchState,
    occupancies: &[Occupancy],
    pair_idx: usize,
) -> Option<Insertion> {
    let pair = model.pairs.get(pair_idx)?;
    let (pickup, delivery) = (pair.pickup, pair.delivery);
    let cost = |from: usize, to: usize| model.arc_cost(from, to);

    let mut candidates = state
        .routes
        .iter()
        .enumerate()
        .flat_map(|(vehicle, route)| {
            let size = route.len();
            (1..size).flat_map(move |i| (i..size).map(move |j| (vehicle, i, j)))
        })
        .map(|(vehicle, i, j)| {
            let route = &state.routes[vehicle];
            let delta = if i == j {
                cost(route[i - 1], pickup) + cost(pickup, delivery) + cost(delivery, route[i])
                    - cost(route[i - 1], route[i])
            } else {
                cost(route[i - 1], pickup) + cost(pickup, route[i]) - cost(route[i - 1], route[i])
                    + cost(route[j - 1], delivery)
                    + cost(delivery, route[j])
                    - cost(route[j - 1], route[j])
            };

            (delta, vehicle, i, j)
        })
        .collect::<Vec<_>>();

    candidates.sort_unstable();

    candidates.into_iter().find_map(|(delta, vehicle, i, j)| {
        let original = &state.routes[vehicle];
        let route = original[..i]
            .iter()
            .copied()
            .chain(std::iter::once(pickup))
            .chain(original[i..j].iter().copied())
            .chain(std::iter::once(delivery))
            .chain(original[j..].iter().copied())
            .collect::<Vec<_>>();

        schedule_route(model, vehicle, &route, &occupancies[vehicle])
            .map(|visits| Insertion { pair: pair_idx, vehicle, cost: delta, route, visits })
    })
}
