use super::*;

fn visit(node: usize, distance: i64, time: i64, load: i64) -> Visit {
    Visit { node, distance, time, load }
}

fn create_assignment() -> Assignment {
    Assignment {
        routes: vec![
            RouteAssignment {
                vehicle: 0,
                visits: vec![visit(0, 0, 0, 0), visit(3, 10, 20, 0), visit(4, 25, 50, 5), visit(1, 40, 70, 0)],
            },
            RouteAssignment { vehicle: 1, visits: vec![visit(2, 0, 5, 0), visit(2, 0, 5, 0)] },
        ],
        dropped: vec![5, 6],
        objective: 40,
    }
}

#[test]
fn can_calculate_totals() {
    let assignment = create_assignment();

    assert_eq!(assignment.total_distance(), 40);
    assert_eq!(assignment.total_time(), 75);
    assert!(!assignment.routes[0].is_empty());
    assert!(assignment.routes[1].is_empty());
}

#[test]
fn can_find_visits() {
    let assignment = create_assignment();

    assert_eq!(assignment.vehicle_of(4), Some(0));
    assert_eq!(assignment.vehicle_of(5), None);
    assert_eq!(assignment.visit_of(3).map(|visit| visit.time), Some(20));
}
