use perfuse_graph::{
    assign_center_distances, distances_from, gen_cubic_lattice, hop_distance, Role, VesselNetwork,
};

#[test]
fn center_distance_is_absolute_difference() {
    let mut net = gen_cubic_lattice(3).unwrap();
    assign_center_distances(&mut net).unwrap();
    for edge in net.edge_ids() {
        let src = net.src_dist(edge).unwrap();
        let sink = net.sink_dist(edge).unwrap();
        assert_eq!(net.center_dist(edge).unwrap(), src.abs_diff(sink));
    }
}

#[test]
fn source_adjacent_edges_have_zero_source_distance() {
    let mut net = gen_cubic_lattice(3).unwrap();
    assign_center_distances(&mut net).unwrap();
    for source in net.nodes_with_role(Role::Source) {
        for edge in net.out_edges(source).unwrap() {
            assert_eq!(net.src_dist(edge).unwrap(), 0);
        }
    }
}

#[test]
fn unreachable_tail_falls_back_to_zero() {
    // s -> a -> k, plus b -> a with b unreachable from the source.
    let mut net = VesselNetwork::new(1).unwrap();
    let s = net.add_node([0.1, 0.1, 0.1], Role::Source);
    let a = net.add_node([0.3, 0.3, 0.3], Role::Interior);
    let b = net.add_node([0.5, 0.5, 0.5], Role::Interior);
    let k = net.add_node([0.7, 0.7, 0.7], Role::Sink);
    net.add_edge(s, a).unwrap();
    let stranded = net.add_edge(b, a).unwrap();
    net.add_edge(a, k).unwrap();

    assign_center_distances(&mut net).unwrap();
    assert_eq!(net.src_dist(stranded).unwrap(), 0);
    assert_eq!(net.sink_dist(stranded).unwrap(), 1);
    assert_eq!(net.center_dist(stranded).unwrap(), 1);
}

#[test]
fn unreachable_head_falls_back_to_zero() {
    // s -> c where c cannot reach any sink.
    let mut net = VesselNetwork::new(1).unwrap();
    let s = net.add_node([0.1, 0.1, 0.1], Role::Source);
    let c = net.add_node([0.3, 0.3, 0.3], Role::Interior);
    let k = net.add_node([0.7, 0.7, 0.7], Role::Sink);
    let dead_end = net.add_edge(s, c).unwrap();
    net.add_edge(s, k).unwrap();

    assign_center_distances(&mut net).unwrap();
    assert_eq!(net.sink_dist(dead_end).unwrap(), 0);
    assert_eq!(net.src_dist(dead_end).unwrap(), 0);
}

#[test]
fn hop_distances_follow_edge_direction() {
    let mut net = VesselNetwork::new(1).unwrap();
    let a = net.add_node([0.1, 0.1, 0.1], Role::Interior);
    let b = net.add_node([0.3, 0.3, 0.3], Role::Interior);
    let c = net.add_node([0.5, 0.5, 0.5], Role::Interior);
    net.add_edge(a, b).unwrap();
    net.add_edge(b, c).unwrap();

    assert_eq!(hop_distance(&net, a, c).unwrap(), Some(2));
    assert_eq!(hop_distance(&net, c, a).unwrap(), None);

    let from_a = distances_from(&net, a).unwrap();
    assert_eq!(from_a, vec![Some(0), Some(1), Some(2)]);
}
