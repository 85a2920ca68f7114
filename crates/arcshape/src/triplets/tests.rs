use super::*;
use crate::angle::signed_vertex_angle;
use proptest::prelude::*;
use std::f64::consts::{PI, TAU};

fn seeded(target: usize, seed: u64) -> Generation {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(target, &GenCfg::default(), &mut rng).expect("valid target")
}

fn check_invariants(g: &Generation, radius: f64) {
    assert!(g.triplets.len() <= g.requested);
    assert_eq!(g.triplets.len(), g.arcs.len());
    for a in &g.arcs {
        assert!(a.start < a.end, "degenerate claimed arc {a:?}");
        assert!(a.start >= 0.0 && a.end <= TAU + 1e-12, "arc {a:?} leaves [0, 2π]");
    }
    for w in g.arcs.windows(2) {
        assert!(w[0].start <= w[1].start);
        assert!(
            w[0].end <= w[1].start + g.spacing.buffer,
            "overlap {:?} / {:?}",
            w[0],
            w[1]
        );
    }
    for t in &g.triplets {
        assert!((t.left.norm() - radius).abs() < 1e-9);
        assert!((t.right.norm() - radius).abs() < 1e-9);
        if t.is_fallback() {
            assert_eq!(t.center.norm(), 0.0);
        } else {
            assert!(t.center.norm() < radius);
            assert!(signed_vertex_angle(t.left, t.center, t.right) < PI);
        }
    }
}

#[test]
fn rejects_targets_below_three() {
    let mut rng = StdRng::seed_from_u64(0);
    for n in 0..3 {
        let err = generate_with(n, &GenCfg::default(), &mut rng).unwrap_err();
        assert!(matches!(err, GenError::InvalidArgument { .. }));
        assert!(generate_triplets(n, Some(1)).is_err());
    }
}

#[test]
fn rejects_bad_cfg() {
    let mut rng = StdRng::seed_from_u64(0);
    let bad = [
        GenCfg {
            radius: 0.0,
            ..GenCfg::default()
        },
        GenCfg {
            center_spread: 1.5,
            ..GenCfg::default()
        },
        GenCfg {
            buffer_scale: 2.0,
            ..GenCfg::default()
        },
    ];
    for cfg in bad {
        assert!(generate_with(5, &cfg, &mut rng).is_err());
    }
}

#[test]
fn three_points_always_fit() {
    for seed in 0..50 {
        let g = seeded(3, seed);
        assert_eq!(g.triplets.len(), 3, "seed {seed}");
        assert_eq!(g.status, Status::Done);
        check_invariants(&g, 1.0);
    }
}

#[test]
fn first_triplet_is_centered_in_half_circle() {
    let g = seeded(3, 17);
    // Gap [π/2, 3π/2], midpoint π, neighbors at π ± π/3.
    let a = g.arcs.iter().find(|a| a.contains(PI)).expect("arc around π");
    assert!((a.start - 2.0 * PI / 3.0).abs() < 1e-12);
    assert!((a.end - 4.0 * PI / 3.0).abs() < 1e-12);
}

#[test]
fn dense_request_exhausts_early() {
    let g = seeded(200, 5);
    assert_eq!(g.status, Status::Exhausted);
    assert!(g.triplets.len() < 200);
    assert!(!g.triplets.is_empty());
    check_invariants(&g, 1.0);
}

#[test]
fn fixed_seed_is_reproducible() {
    let a = generate_triplets(12, Some(99)).unwrap();
    let b = generate_triplets(12, Some(99)).unwrap();
    assert_eq!(a, b);
    let c = generate_triplets(12, Some(100)).unwrap();
    assert_eq!(a.len(), c.len());
}

#[test]
fn unseeded_run_still_satisfies_bounds() {
    let t = generate_triplets(8, None).unwrap();
    assert!(!t.is_empty() && t.len() <= 8);
}

#[test]
fn radius_scales_boundary_points() {
    let cfg = GenCfg {
        radius: 2.5,
        ..GenCfg::default()
    };
    let mut rng = StdRng::seed_from_u64(4);
    let g = generate_with(10, &cfg, &mut rng).unwrap();
    check_invariants(&g, 2.5);
}

#[test]
fn replay_token_regenerates_batch_item() {
    let count = PointCount::Uniform { min: 3, max: 30 };
    let tok = ReplayToken { seed: 42, index: 7 };
    let a = draw_generation(count, &GenCfg::default(), tok).unwrap();
    let b = draw_generation(count, &GenCfg::default(), tok).unwrap();
    assert_eq!(a.requested, b.requested);
    assert_eq!(a.triplets, b.triplets);
    assert!((3..30).contains(&a.requested));
}

#[test]
fn point_count_ranges() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(PointCount::Fixed(2).sample(&mut rng), 2);
    assert_eq!(PointCount::Uniform { min: 0, max: 3 }.sample(&mut rng), 3);
    for _ in 0..100 {
        let n = PointCount::Uniform { min: 1, max: 6 }.sample(&mut rng);
        assert!((3..6).contains(&n));
    }
}

#[test]
fn spacing_defaults() {
    let s = Spacing::for_count(4, 1.0);
    assert!((s.width - PI / 2.0).abs() < 1e-12);
    assert!((s.buffer - PI / 4.0).abs() < 1e-12);
    let half = Spacing::for_count(4, 0.5);
    assert!((half.buffer - PI / 8.0).abs() < 1e-12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_runs_keep_invariants(
        seed in any::<u64>(),
        n in 3usize..80,
        spread in prop_oneof![Just(0.0), 0.0f64..=1.0],
    ) {
        let cfg = GenCfg { center_spread: spread, ..GenCfg::default() };
        let mut rng = StdRng::seed_from_u64(seed);
        let g = generate_with(n, &cfg, &mut rng).unwrap();
        check_invariants(&g, 1.0);
        prop_assert!(!g.triplets.is_empty());
        prop_assert_eq!(g.status == Status::Done, g.triplets.len() == n);
    }
}
