use std::f64::consts::PI;

use perfuse_graph::{Role, VesselNetwork};
use perfuse_metrics::{surface_area, total_volume};

fn two_vessel_network(lengths: [f64; 2], radii: [f64; 2]) -> VesselNetwork {
    let mut net = VesselNetwork::new(1).unwrap();
    let a = net.add_node([0.1, 0.1, 0.1], Role::Source);
    let b = net.add_node([0.4, 0.4, 0.4], Role::Interior);
    let c = net.add_node([0.8, 0.8, 0.8], Role::Sink);
    for (idx, (tail, head)) in [(a, b), (b, c)].into_iter().enumerate() {
        let edge = net.add_edge(tail, head).unwrap();
        net.set_length(edge, lengths[idx]).unwrap();
        net.set_radius(edge, radii[idx]).unwrap();
    }
    net
}

#[test]
fn aggregates_match_closed_forms() {
    let net = two_vessel_network([0.5, 1.5], [0.1, 0.2]);
    let area = surface_area(&net).unwrap();
    let volume = total_volume(&net).unwrap();

    let expected_area = 0.1 * 0.5 + 0.2 * 1.5;
    let expected_volume = PI * (0.1 * 0.1 * 0.5 + 0.2 * 0.2 * 1.5);
    assert!((area - expected_area).abs() < 1e-12);
    assert!((volume - expected_volume).abs() < 1e-12);
    assert!(area > 0.0);
    assert!(volume > 0.0);
}

#[test]
fn aggregates_scale_linearly_with_length() {
    let base = two_vessel_network([0.5, 1.5], [0.1, 0.2]);
    let doubled = two_vessel_network([1.0, 3.0], [0.1, 0.2]);

    let area = surface_area(&base).unwrap();
    let area_doubled = surface_area(&doubled).unwrap();
    assert!((area_doubled - 2.0 * area).abs() / area_doubled < 1e-12);

    let volume = total_volume(&base).unwrap();
    let volume_doubled = total_volume(&doubled).unwrap();
    assert!((volume_doubled - 2.0 * volume).abs() / volume_doubled < 1e-12);
}
