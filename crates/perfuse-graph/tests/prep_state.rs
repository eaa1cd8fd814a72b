use perfuse_core::{PerfuseError, Physiology};
use perfuse_graph::{
    assign_lengths, assign_uniform_radii, gen_cubic_lattice, prep_for_simulation, Role,
};

fn prepped(resolution: usize) -> perfuse_graph::VesselNetwork {
    let mut net = gen_cubic_lattice(resolution).unwrap();
    assign_lengths(&mut net).unwrap();
    assign_uniform_radii(&mut net).unwrap();
    prep_for_simulation(&mut net, &Physiology::default()).unwrap();
    net
}

#[test]
fn prep_consolidates_anchors_and_feed_edges() {
    let net = prepped(2);
    // 2x2x2 grid plus the two aggregate anchors.
    assert_eq!(net.node_count(), 10);
    // 12 lattice edges, 2 inlet feeds, 2 outlet drains.
    assert_eq!(net.edge_count(), 16);

    let source = net.designated_source().unwrap();
    let sink = net.designated_sink().unwrap();
    assert_eq!(net.role(source).unwrap(), Role::Source);
    assert_eq!(net.role(sink).unwrap(), Role::Sink);
    assert_eq!(net.out_edges(source).unwrap().len(), 2);
    assert_eq!(net.in_edges(sink).unwrap().len(), 2);
}

#[test]
fn prep_assigns_contiguous_state_indices() {
    let net = prepped(3);
    let mut indices: Vec<usize> = net
        .edge_ids()
        .into_iter()
        .map(|edge| net.state_index(edge).unwrap())
        .collect();
    indices.sort_unstable();
    let expected: Vec<usize> = (0..net.edge_count()).collect();
    assert_eq!(indices, expected);
}

#[test]
fn prep_fills_positive_volumes_and_transit_rates() {
    let net = prepped(2);
    for edge in net.edge_ids() {
        assert!(net.volume(edge).unwrap() > 0.0);
        assert!(net.inverse_transit_time(edge).unwrap() > 0.0);
    }
}

#[test]
fn prep_refuses_to_run_twice() {
    let mut net = gen_cubic_lattice(2).unwrap();
    assign_lengths(&mut net).unwrap();
    assign_uniform_radii(&mut net).unwrap();
    prep_for_simulation(&mut net, &Physiology::default()).unwrap();

    let err = prep_for_simulation(&mut net, &Physiology::default()).unwrap_err();
    match err {
        PerfuseError::Precondition(info) => assert_eq!(info.code, "already-prepared"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn prep_fails_fast_without_radii() {
    let mut net = gen_cubic_lattice(2).unwrap();
    assign_lengths(&mut net).unwrap();
    let err = prep_for_simulation(&mut net, &Physiology::default()).unwrap_err();
    match err {
        PerfuseError::Graph(info) => assert_eq!(info.code, "missing-attribute"),
        other => panic!("unexpected error: {other:?}"),
    }
}
