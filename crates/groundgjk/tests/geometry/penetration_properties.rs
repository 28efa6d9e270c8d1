use crate::polygons::{random_polygon, regular_polygon, sat_overlap, translated};
use approx::assert_relative_eq;
use groundgjk::query::{self, GjkEpaOptions};

const NPAIRS: usize = 500;
// Pairs closer than this to touching are skipped: either answer is valid there.
const AMBIGUITY: f32 = 0.02;

#[test]
fn random_polygon_pairs_match_the_separating_axis_test() {
    let options = GjkEpaOptions::default();
    let mut rng = oorandom::Rand32::new(42);
    let mut noverlapping = 0;

    for _ in 0..NPAIRS {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);
        let sat = sat_overlap(&a, &b);

        if sat.abs() < AMBIGUITY {
            continue;
        }

        let result = query::intersect_with_options(&a, &b, &options).unwrap();

        if sat < 0.0 {
            assert_eq!(result, None, "{:?} {:?}", a, b);
            continue;
        }

        noverlapping += 1;
        let penetration = result.unwrap();

        assert!(penetration.depth >= sat - 1.0e-3, "{} < {}", penetration.depth, sat);
        assert!(penetration.depth <= sat + options.epa_tolerance + 1.0e-3);
        assert_relative_eq!(penetration.normal.norm(), 1.0, epsilon = 1.0e-5);
        assert_eq!(penetration.normal.y, 0.0);
    }

    assert!(noverlapping > NPAIRS / 10);
}

#[test]
fn random_penetrations_are_resolved_by_their_separation() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..NPAIRS {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);

        if let Some(penetration) = query::intersect(&a, &b).unwrap() {
            let push = penetration.separation_a() - *penetration.normal * AMBIGUITY;
            let moved = translated(&a, &push);
            assert_eq!(query::intersect(&moved, &b), Ok(None));

            let push = penetration.separation_b() + *penetration.normal * AMBIGUITY;
            let moved = translated(&b, &push);
            assert_eq!(query::intersect(&a, &moved), Ok(None));
        }
    }
}

#[test]
fn swapping_the_shapes_preserves_the_depth() {
    let options = GjkEpaOptions::default();
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..NPAIRS {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);

        if sat_overlap(&a, &b) < AMBIGUITY {
            continue;
        }

        let ab = query::intersect(&a, &b).unwrap().unwrap();
        let ba = query::intersect(&b, &a).unwrap().unwrap();
        assert!((ab.depth - ba.depth).abs() <= options.epa_tolerance + 1.0e-3);
    }
}

#[test]
fn intersection_test_agrees_with_intersect() {
    let options = GjkEpaOptions::default();
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..NPAIRS {
        let a = random_polygon(&mut rng);
        let b = random_polygon(&mut rng);

        let overlap = query::intersection_test(&a, &b, &options).unwrap();
        let penetration = query::intersect_with_options(&a, &b, &options).unwrap();
        assert_eq!(overlap, penetration.is_some());
    }
}

#[test]
fn circles_with_tight_tolerance() {
    let options = GjkEpaOptions {
        epa_tolerance: 1.0e-4,
        ..GjkEpaOptions::default()
    };
    let a = regular_polygon([0.0, 0.0], 1.0, 32, 0.0);

    for (x, z) in [(1.5, 0.0), (0.3, 0.4), (-1.2, 0.9), (0.0, 0.0)] {
        let b = regular_polygon([x, z], 1.0, 32, 0.1);
        let sat = sat_overlap(&a, &b);
        let penetration = query::intersect_with_options(&a, &b, &options)
            .unwrap()
            .unwrap();

        assert!(penetration.depth >= sat - 1.0e-3);
        assert!(penetration.depth <= sat + options.epa_tolerance + 1.0e-3);
    }
}
