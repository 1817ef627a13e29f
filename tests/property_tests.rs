mod common;

use blockforge::graph::InteractionGraph;
use blockforge::scorer::{contributions, fitness};
use blockforge::{Instance, Layout};
use common::naive_fitness;
use proptest::prelude::*;

// --- STRATEGIES ---

// Integer-valued data keeps every sum exact in f64, so equalities are strict.
prop_compose! {
    fn arb_raw(max_n: usize)(n in 0..=max_n)(
        calls in proptest::collection::vec(
            prop_oneof![3 => Just(0u32), 2 => 0u32..1000],
            n * n
        ),
        sizes in proptest::collection::vec(1u32..200, n),
        n in Just(n)
    ) -> (Vec<Vec<f64>>, Vec<f64>) {
        let rows = (0..n)
            .map(|i| calls[i * n..(i + 1) * n].iter().map(|&c| c as f64).collect())
            .collect();
        (rows, sizes.into_iter().map(|s| s as f64).collect())
    }
}

fn arb_perm(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
}

prop_compose! {
    fn arb_case()((calls, sizes) in arb_raw(9))(
        order in arb_perm(sizes.len()),
        relabel in arb_perm(sizes.len()),
        calls in Just(calls),
        sizes in Just(sizes)
    ) -> (Instance, Vec<usize>, Vec<usize>) {
        let inst = Instance::new(calls, sizes).unwrap();
        (inst, order, relabel)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_matches_naive((inst, order, _) in arb_case()) {
        let l = Layout::new(order.clone(), inst.block_count()).unwrap();
        prop_assert_eq!(fitness(&inst, &l).unwrap(), naive_fitness(&inst, &order));
    }

    #[test]
    fn prop_contributions_sum_to_twice_fitness((inst, order, _) in arb_case()) {
        let l = Layout::new(order, inst.block_count()).unwrap();
        let sum: f64 = contributions(&inst, &l).unwrap().iter().sum();
        prop_assert_eq!(sum, 2.0 * fitness(&inst, &l).unwrap());
    }

    #[test]
    fn prop_reversal_invariant((inst, order, _) in arb_case()) {
        let l = Layout::new(order, inst.block_count()).unwrap();
        prop_assert_eq!(
            fitness(&inst, &l).unwrap(),
            fitness(&inst, &l.reversed()).unwrap()
        );
    }

    #[test]
    fn prop_transpose_invariant((inst, order, _) in arb_case()) {
        let rows = inst.call_rows();
        let n = inst.block_count();
        let transposed: Vec<Vec<f64>> =
            (0..n).map(|i| (0..n).map(|j| rows[j][i]).collect()).collect();
        let t = Instance::new(transposed, inst.sizes().to_vec()).unwrap();

        let l = Layout::new(order, n).unwrap();
        prop_assert_eq!(fitness(&inst, &l).unwrap(), fitness(&t, &l).unwrap());
    }

    #[test]
    fn prop_relabel_invariant((inst, order, relabel) in arb_case()) {
        // Old block b becomes block relabel[b].
        let n = inst.block_count();
        let mut calls = vec![vec![0.0; n]; n];
        let mut sizes = vec![0.0; n];
        for a in 0..n {
            sizes[relabel[a]] = inst.size(a);
            for b in 0..n {
                calls[relabel[a]][relabel[b]] = inst.calls(a, b);
            }
        }
        let renamed = Instance::new(calls, sizes).unwrap();
        let renamed_order: Vec<usize> = order.iter().map(|&b| relabel[b]).collect();

        let original = fitness(&inst, &Layout::new(order, n).unwrap()).unwrap();
        let moved = fitness(&renamed, &Layout::new(renamed_order, n).unwrap()).unwrap();
        prop_assert_eq!(original, moved);
    }

    #[test]
    fn prop_graph_shape((inst, order, _) in arb_case()) {
        let n = inst.block_count();
        let l = Layout::new(order, n).unwrap();
        let g = InteractionGraph::build(&inst, &l).unwrap();

        prop_assert_eq!(g.node_count(), n);
        prop_assert_eq!(g.edge_count(), n * n.saturating_sub(1) / 2);
        for e in &g.edges {
            prop_assert!(e.distance_hint >= 0.0);
            prop_assert!(e.distance_hint < inst.total_size());
            prop_assert_eq!(e.weight, inst.calls(e.from, e.to));
        }
    }

    #[test]
    fn prop_small_instances_score_zero((calls, sizes) in arb_raw(1)) {
        let inst = Instance::new(calls, sizes).unwrap();
        let l = Layout::identity(inst.block_count());
        prop_assert_eq!(fitness(&inst, &l).unwrap(), 0.0);
    }
}
