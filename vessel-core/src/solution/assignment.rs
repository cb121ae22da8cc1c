#[cfg(test)]
#[path = "../../tests/unit/solution/assignment_test.rs"]
mod assignment_test;

use crate::models::common::{Distance, Duration, Timestamp};

/// A visit of the node with cumulative dimension values at arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit {
    pub node: usize,
    /// Cumulative distance.
    pub distance: Distance,
    /// Cumulative time, that is the service start time.
    pub time: Timestamp,
    /// Cumulative load before the node demand is applied.
    pub load: i64,
}

/// A route of one vehicle: visits from its start node to its end node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteAssignment {
    pub vehicle: usize,
    pub visits: Vec<Visit>,
}

impl RouteAssignment {
    /// Returns true if vehicle goes directly from its start to its end.
    pub fn is_empty(&self) -> bool {
        self.visits.len() <= 2
    }

    /// Returns total distance of the route.
    pub fn distance(&self) -> Distance {
        self.visits.last().map_or(0, |visit| visit.distance)
    }

    /// Returns cumulative time at the end node.
    pub fn end_time(&self) -> Duration {
        self.visits.last().map_or(0, |visit| visit.time)
    }
}

/// A solution returned by a routing solver. Read only once received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    /// One route per vehicle in vehicle order.
    pub routes: Vec<RouteAssignment>,
    /// Nodes left unvisited.
    pub dropped: Vec<usize>,
    pub objective: i64,
}

impl Assignment {
    /// Returns total distance of all routes.
    pub fn total_distance(&self) -> Distance {
        self.routes.iter().map(|route| route.distance()).sum()
    }

    /// Returns sum of end times of all routes.
    pub fn total_time(&self) -> Duration {
        self.routes.iter().map(|route| route.end_time()).sum()
    }

    /// Returns a vehicle which visits the node.
    pub fn vehicle_of(&self, node: usize) -> Option<usize> {
        self.routes.iter().find(|route| route.visits.iter().any(|visit| visit.node == node)).map(|route| route.vehicle)
    }

    /// Returns a visit of the node.
    pub fn visit_of(&self, node: usize) -> Option<&Visit> {
        self.routes.iter().flat_map(|route| route.visits.iter()).find(|visit| visit.node == node)
    }
}
