use crate::polygons::{rect, regular_polygon};
use groundgjk::query::{self, GjkEpaOptions, QueryError, QueryStage};

#[test]
fn epa_iteration_limit() {
    let square = rect([0.0, 0.0], [1.0, 1.0]);
    let options = GjkEpaOptions {
        epa_max_iterations: 1,
        ..GjkEpaOptions::default()
    };

    assert_eq!(
        query::intersect_with_options(&square, &square, &options),
        Err(QueryError::NoConvergence {
            stage: QueryStage::Epa,
            iterations: 1,
        })
    );

    // The overlap test alone does not run EPA.
    assert_eq!(query::intersection_test(&square, &square, &options), Ok(true));
}

#[test]
fn epa_without_iterations_never_converges() {
    let square = rect([0.0, 0.0], [1.0, 1.0]);
    let options = GjkEpaOptions {
        epa_max_iterations: 0,
        ..GjkEpaOptions::default()
    };

    assert_eq!(
        query::intersect_with_options(&square, &square, &options),
        Err(QueryError::NoConvergence {
            stage: QueryStage::Epa,
            iterations: 0,
        })
    );
}

#[test]
fn gjk_iteration_limit() {
    let a = rect([0.0, 0.0], [1.0, 1.0]);
    let b = rect([0.7, 0.0], [1.7, 1.0]);

    for limit in [0, 1] {
        let options = GjkEpaOptions {
            gjk_max_iterations: Some(limit),
            ..GjkEpaOptions::default()
        };

        let expected = Err(QueryError::NoConvergence {
            stage: QueryStage::Gjk,
            iterations: limit,
        });
        assert_eq!(query::intersect_with_options(&a, &b, &options), expected);
        assert_eq!(
            query::intersection_test(&a, &b, &options),
            Err(QueryError::NoConvergence {
                stage: QueryStage::Gjk,
                iterations: limit,
            })
        );
    }
}

#[test]
fn derived_gjk_limit_is_enough_for_many_vertices() {
    let a = regular_polygon([0.0, 0.0], 1.0, 64, 0.0);
    let b = regular_polygon([0.5, 0.5], 1.0, 64, 0.03);

    let penetration = query::intersect(&a, &b).unwrap().unwrap();
    assert!(penetration.depth > 1.0);
}

#[test]
fn larger_tolerance_stops_earlier() {
    let a = regular_polygon([0.0, 0.0], 1.0, 48, 0.0);
    let b = regular_polygon([1.0, 0.3], 1.0, 48, 0.05);

    let coarse = GjkEpaOptions {
        epa_tolerance: 0.5,
        ..GjkEpaOptions::default()
    };
    let fine = GjkEpaOptions {
        epa_tolerance: 1.0e-5,
        ..GjkEpaOptions::default()
    };

    let coarse = query::intersect_with_options(&a, &b, &coarse).unwrap().unwrap();
    let fine = query::intersect_with_options(&a, &b, &fine).unwrap().unwrap();
    assert!(coarse.depth + 1.0e-5 >= fine.depth);
    assert!(coarse.depth <= fine.depth + 0.5 + 1.0e-3);
}
