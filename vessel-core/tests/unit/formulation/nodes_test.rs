use super::*;
use crate::helpers::models::*;
use crate::models::problem::Vessel;

#[test]
fn can_build_nodes_with_explicit_terminals() {
    let config = create_test_config();
    let dataset = create_sample_dataset();
    let sites = create_sites(&dataset, &config);

    let layout = build_virtual_nodes(&dataset, &sites, &config).unwrap();

    assert_eq!(layout.depot, None);
    assert_eq!(layout.nodes.len(), 26);
    assert_eq!(layout.starts, vec![0, 1, 2]);
    assert_eq!(layout.ends, vec![3, 4, 5]);
    assert!(layout.nodes[..6].iter().all(|node| node.site == 1 && node.action.is_none() && node.demand == 0));
    assert_eq!(layout.pairs.len(), 10);
    assert_eq!(layout.pairs[0], PickupDeliveryPair { pickup: 6, delivery: 7 });
    assert!(layout.pairs.iter().all(|pair| pair.delivery == pair.pickup + 1));
}

#[test]
fn can_build_item_nodes() {
    let config = create_test_config();
    let dataset = create_sample_dataset();
    let sites = create_sites(&dataset, &config);

    let layout = build_virtual_nodes(&dataset, &sites, &config).unwrap();

    let (load, unload) = (&layout.nodes[6], &layout.nodes[7]);
    assert_eq!(load.action, Some(NodeAction::Load));
    assert_eq!(load.demand, 140);
    assert_eq!(load.lifts, 2);
    assert_eq!(load.service_time, 6);
    assert_eq!(load.location, "Port");
    assert_eq!(load.cargo, Some(0));
    assert_eq!(unload.action, Some(NodeAction::Unload));
    assert_eq!(unload.demand, -140);
    assert_eq!(unload.location, "one");
    assert_eq!(unload.category, LocationCategory::Platform);

    let last_load = &layout.nodes[24];
    assert_eq!(last_load.location, "one");
    assert_eq!(last_load.cargo, Some(9));
    assert_eq!(layout.nodes[25].location, "three");
}

#[test]
fn can_build_nodes_with_depot() {
    let config = create_test_config();
    let dataset = create_depot_dataset();
    let sites = create_sites(&dataset, &config);

    let layout = build_virtual_nodes(&dataset, &sites, &config).unwrap();

    assert_eq!(layout.depot, Some(0));
    assert_eq!(layout.nodes.len(), 21);
    assert_eq!(layout.nodes[0].category, LocationCategory::Depot);
    assert_eq!(layout.nodes[0].site, Sites::DEPOT);
    assert_eq!(layout.starts, vec![0, 0, 0]);
    assert_eq!(layout.ends, vec![0, 0, 0]);
    assert_eq!(layout.pairs[0], PickupDeliveryPair { pickup: 1, delivery: 2 });
}

#[test]
fn can_mix_explicit_and_depot_terminals() {
    let config = create_test_config();
    let mut dataset = create_depot_dataset();
    dataset.vessels = vec![
        Vessel::new("Vessel1", 200, 8.).with_terminals(Some("one"), None),
        Vessel::new("Vessel2", 200, 8.).with_terminals(Some("Port"), Some("one")),
        Vessel::new("Vessel3", 200, 8.),
    ];
    let sites = create_sites(&dataset, &config);

    let layout = build_virtual_nodes(&dataset, &sites, &config).unwrap();

    assert_eq!(layout.depot, Some(0));
    assert_eq!(layout.starts, vec![1, 2, 0]);
    assert_eq!(layout.ends, vec![0, 3, 0]);
    assert_eq!(layout.nodes[1].location, "one");
    assert_eq!(layout.nodes[3].location, "one");
    assert_eq!(layout.pairs[0].pickup, 4);
}

parameterized_test! {can_fail_on_unknown_location, (start, end, delivery, expected_code), {
    can_fail_on_unknown_location_impl(start, end, delivery, expected_code);
}}

can_fail_on_unknown_location! {
    case_01_start: (Some("four"), Some("Port"), "one", "E1001"),
    case_02_end: (Some("Port"), Some("four"), "one", "E1002"),
    case_03_delivery: (Some("Port"), Some("Port"), "four", "E1004"),
}

fn can_fail_on_unknown_location_impl(start: Option<&str>, end: Option<&str>, delivery: &str, expected_code: &str) {
    let config = create_test_config();
    let mut dataset = create_sample_dataset();
    dataset.vessels[1] = dataset.vessels[1].clone().with_terminals(start, end);
    dataset.items[2].delivery = delivery.to_string();
    let sites = create_sites(&dataset, &config);

    let result = build_virtual_nodes(&dataset, &sites, &config);

    assert_eq!(result.err().map(|err| err.code), Some(expected_code.to_string()));
}
