use super::*;
use crate::helpers::models::*;

#[test]
fn can_assemble_sample_model() {
    let model = assemble_model(&create_sample_dataset(), create_test_config()).unwrap();

    assert_eq!(model.node_count(), 26);
    assert_eq!(model.vehicle_count(), 3);
    assert_eq!(model.pairs.len(), 10);
    assert_eq!(model.depot, None);
    assert_eq!(model.time_matrices.len(), 3);
    assert!(model.time_matrices.iter().all(|matrix| matrix.size() == 26));
    assert_eq!(model.time_dimension, TimeDimension { max_slack: 100_000, horizon: 100_000 });
}

#[test]
fn can_define_vehicle_domains() {
    let model = assemble_model(&create_sample_dataset(), create_test_config()).unwrap();

    let vehicle = &model.vehicles[1];
    assert_eq!(vehicle.id, "Vessel2");
    assert_eq!(vehicle.capacity, 250);
    assert_eq!((vehicle.start, vehicle.end), (1, 4));
    assert_eq!(vehicle.start_domain.window, TimeWindow::new(0, 1440));
    assert_eq!(vehicle.start_domain.excluded, vec![TimeWindow::new(0, 360)]);
    assert_eq!(vehicle.end_domain, TimeDomain::new(TimeWindow::new(0, 100_000)));
    assert_eq!(vehicle.max_distance, 100_000_000);
}

#[test]
fn can_define_callbacks() {
    let model = assemble_model(&create_sample_dataset(), create_test_config()).unwrap();

    assert!(model.is_start(0) && !model.is_end(0));
    assert!(model.is_end(5) && !model.is_start(5));
    assert_eq!(model.demand(0), 0);
    assert_eq!(model.demand(6), 140);
    assert_eq!(model.demand(7), -140);
    assert_eq!(model.pair_of(7), Some(0));
    assert_eq!(model.pair_of(2), None);
    assert_eq!(model.distance(6, 7), 1303);
    assert_eq!(model.arc_cost(6, 7), model.distance(6, 7));
    assert!(model.distance_matrix.is_symmetric());
    assert!(model.transit_time(0, 6, 7) >= model.nodes[6].service_time);
}

#[test]
fn can_define_drop_penalties_for_item_nodes_only() {
    let model = assemble_model(&create_depot_dataset(), create_test_config()).unwrap();

    assert_eq!(model.disjunctions.len(), 20);
    assert!(model.disjunctions.iter().all(|disjunction| disjunction.node > 0 && disjunction.penalty == 100_000_000));
    assert_eq!(model.drop_penalty(0), None);
    assert_eq!(model.drop_penalty(1), Some(100_000_000));
}

#[test]
fn can_create_concurrency_groups() {
    let model = assemble_model(&create_sample_dataset(), create_test_config()).unwrap();

    let groups = model
        .concurrency
        .iter()
        .map(|group| (group.location.as_str(), group.capacity, group.members.len()))
        .collect::<Vec<_>>();

    assert_eq!(groups, vec![("Port", 6, 12), ("one", 1, 8), ("two", 1, 2), ("three", 1, 1)]);
    assert!(model.concurrency[0].members.contains(&(0, 0)));
    assert!(!model.concurrency[0].members.iter().any(|&(node, _)| model.is_end(node)));
    assert_eq!(model.concurrency_group(7), Some(1));
    assert_eq!(model.concurrency_group(3), None);
}

#[test]
fn can_exclude_depot_from_concurrency() {
    let model = assemble_model(&create_depot_dataset(), create_test_config()).unwrap();

    assert_eq!(model.depot, Some(0));
    assert_eq!(model.concurrency_group(0), None);
    assert!(model.concurrency.iter().all(|group| group.category != LocationCategory::Depot));
}

parameterized_test! {can_fail_on_invalid_data, (pickup_default, vessel_end, expected), {
    can_fail_on_invalid_data_impl(pickup_default, vessel_end, expected);
}}

can_fail_on_invalid_data! {
    case_01_unknown_default_pickup: ("Base", "Port", "E1000"),
    case_02_unknown_vessel_end: ("Port", "Base", "E1002"),
}

fn can_fail_on_invalid_data_impl(pickup_default: &str, vessel_end: &str, expected: &str) {
    let mut dataset = create_sample_dataset();
    dataset.vessels[0].end = Some(vessel_end.to_string());
    let config = Config { pickup_location_default: pickup_default.to_string(), ..create_test_config() };

    let result = assemble_model(&dataset, config);

    assert!(result.err().is_some_and(|err| err.to_string().starts_with(expected)));
}

#[test]
fn can_fail_on_bad_start_timestamp() {
    let config = Config { start_timestamp: "yesterday".to_string(), ..create_test_config() };

    assert!(assemble_model(&create_sample_dataset(), config).is_err());
}
