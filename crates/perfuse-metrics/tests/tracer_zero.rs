use perfuse_core::{PerfuseError, Physiology};
use perfuse_graph::{Role, VesselNetwork};
use perfuse_metrics::{tracer_mass_curve, Solution, TracerPool};

fn indexed_network(volumes: [f64; 2]) -> VesselNetwork {
    let mut net = VesselNetwork::new(1).unwrap();
    let a = net.add_node([0.1, 0.1, 0.1], Role::Source);
    let b = net.add_node([0.4, 0.4, 0.4], Role::Interior);
    let c = net.add_node([0.8, 0.8, 0.8], Role::Sink);
    for (idx, (tail, head)) in [(a, b), (b, c)].into_iter().enumerate() {
        let edge = net.add_edge(tail, head).unwrap();
        net.set_volume(edge, volumes[idx]).unwrap();
        net.set_state_index(edge, idx).unwrap();
    }
    net
}

#[test]
fn zero_solution_yields_zero_curve_for_both_pools() {
    let net = indexed_network([2.0, 3.0]);
    let steps = 4;
    let width = 3 * net.edge_count();
    let soln = Solution::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0; steps * width], width).unwrap();

    for pool in [TracerPool::Bound, TracerPool::Liposome] {
        let curve = tracer_mass_curve(&net, &Physiology::default(), &soln, pool).unwrap();
        assert_eq!(curve.len(), soln.times().len());
        assert!(curve.iter().all(|value| *value == 0.0));
    }
}

#[test]
fn bound_pool_reads_the_middle_segment() {
    let net = indexed_network([2.0, 3.0]);
    // Two vessels: rows are [free0, free1, bound0, bound1].
    let states = vec![
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];
    let soln = Solution::new(vec![0.0, 1.0], states, 4).unwrap();

    let curve =
        tracer_mass_curve(&net, &Physiology::default(), &soln, TracerPool::Bound).unwrap();
    assert!((curve[0] - 65.0 * 2.0).abs() < 1e-12);
    assert!((curve[1] - 65.0 * 3.0).abs() < 1e-12);
}

#[test]
fn narrow_solution_rows_are_rejected() {
    let net = indexed_network([2.0, 3.0]);
    let soln = Solution::new(vec![0.0], vec![0.0; 3], 3).unwrap();

    let err = tracer_mass_curve(&net, &Physiology::default(), &soln, TracerPool::Bound).unwrap_err();
    match err {
        PerfuseError::Metric(info) => assert_eq!(info.code, "state-width-mismatch"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn misshapen_state_arrays_are_rejected() {
    let err = Solution::new(vec![0.0, 1.0], vec![0.0; 7], 4).unwrap_err();
    match err {
        PerfuseError::Parameter(info) => assert_eq!(info.code, "solution-shape-mismatch"),
        other => panic!("unexpected error: {other:?}"),
    }
}
