use perfuse_core::{PerfuseError, Physiology, RngHandle};
use perfuse_graph::{
    central_difference, gen_cubic_lattice, gen_vascular_network, make_switches, LatticeConfig,
    RadiusPolicy,
};

fn prepared_network(seed: u64) -> perfuse_graph::VesselNetwork {
    let config = LatticeConfig {
        resolution: 3,
        policy: RadiusPolicy::Gamma { repair_passes: 2 },
    };
    gen_vascular_network(&config, &Physiology::default(), &mut RngHandle::from_seed(seed)).unwrap()
}

#[test]
fn switches_require_designated_anchors() {
    let mut net = gen_cubic_lattice(2).unwrap();
    let err = make_switches(&mut net).unwrap_err();
    match err {
        PerfuseError::Precondition(info) => {
            assert_eq!(info.code, "missing-source-anchor");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn central_difference_requires_designated_anchors() {
    let net = gen_cubic_lattice(2).unwrap();
    let edge = net.edge_ids()[0];
    assert!(matches!(
        central_difference(&net, edge),
        Err(PerfuseError::Precondition(_))
    ));
}

#[test]
fn central_difference_is_defined_for_every_prepared_vessel() {
    let net = prepared_network(3);
    let diameter = 2 * net.node_count();
    for edge in net.edge_ids() {
        assert!(central_difference(&net, edge).unwrap() < diameter);
    }
}

#[test]
fn switch_pass_permutes_but_preserves_radii() {
    let mut net = prepared_network(5);
    let edges = net.edge_ids();
    let before: Vec<f64> = edges
        .iter()
        .map(|&edge| net.radius(edge).unwrap())
        .collect();

    make_switches(&mut net).unwrap();

    let after: Vec<f64> = edges
        .iter()
        .map(|&edge| net.radius(edge).unwrap())
        .collect();
    let mut sorted_before = before;
    let mut sorted_after = after;
    sorted_before.sort_by(|a, b| a.partial_cmp(b).unwrap());
    sorted_after.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(sorted_before, sorted_after);
}
