use crate::polygons::{rect, unit_square};
use approx::assert_relative_eq;
use groundgjk::math::Vector;
use groundgjk::query;

#[test]
fn square_square_overlap_along_x() {
    let a = rect([0.0, 0.0], [1.0, 1.0]);
    let b = rect([0.7, 0.0], [1.7, 1.0]);

    let penetration = query::intersect(&a, &b).unwrap().unwrap();
    assert_relative_eq!(penetration.depth, 0.3, epsilon = 1.0e-5);
    assert_relative_eq!(penetration.normal.into_inner(), Vector::x(), epsilon = 1.0e-5);

    let swapped = query::intersect(&b, &a).unwrap().unwrap();
    assert_relative_eq!(swapped.depth, 0.3, epsilon = 1.0e-5);
    assert_relative_eq!(swapped.normal.into_inner(), -Vector::x(), epsilon = 1.0e-5);

    let flipped = penetration.flipped();
    assert_eq!(flipped.depth, penetration.depth);
    assert_relative_eq!(flipped.normal.into_inner(), swapped.normal.into_inner(), epsilon = 1.0e-5);
}

#[test]
fn large_squares_keep_a_unit_normal() {
    let a = rect([0.0, 0.0], [1000.0, 1000.0]);
    let b = rect([700.0, 0.0], [1700.0, 1000.0]);

    let penetration = query::intersect(&a, &b).unwrap().unwrap();
    assert_relative_eq!(penetration.depth, 300.0, epsilon = 1.0e-2);
    assert_relative_eq!(penetration.normal.norm(), 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(penetration.normal.into_inner(), Vector::x(), epsilon = 1.0e-5);
}

#[test]
fn square_square_overlap_along_z() {
    let a = unit_square([0.0, 0.0]);
    let b = unit_square([0.0, 0.75]);

    let penetration = query::intersect(&a, &b).unwrap().unwrap();
    assert_relative_eq!(penetration.depth, 0.25, epsilon = 1.0e-5);
    assert_relative_eq!(penetration.normal.into_inner(), Vector::z(), epsilon = 1.0e-5);
}

#[test]
fn square_square_apart() {
    let a = unit_square([0.0, 0.0]);

    for center in [[10.0, 0.0], [0.0, -3.0], [1.2, 1.2], [-1.01, 0.0]] {
        let b = unit_square(center);
        assert_eq!(query::intersect(&a, &b), Ok(None), "{:?}", center);
        assert_eq!(query::intersect(&b, &a), Ok(None), "{:?}", center);
    }
}

#[test]
fn identical_squares_do_not_depend_on_the_vertex_order() {
    let square = rect([0.0, 0.0], [1.0, 1.0]);

    for shift in 0..square.len() {
        let mut a = square.clone();
        a.rotate_left(shift);
        let mut b = square.clone();
        b.rotate_right(shift);

        for b in [b.clone(), b.into_iter().rev().collect()] {
            let penetration = query::intersect(&a, &b).unwrap().unwrap();
            assert_relative_eq!(penetration.depth, 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(penetration.normal.into_inner(), Vector::x(), epsilon = 1.0e-5);
        }
    }
}

#[test]
fn separation_resolves_the_overlap() {
    let a = unit_square([0.0, 0.0]);
    let b = unit_square([0.6, 0.2]);

    let penetration = query::intersect(&a, &b).unwrap().unwrap();
    let push = penetration.separation_a() - *penetration.normal * 0.01;
    let moved: Vec<_> = a.iter().map(|p| p + push).collect();

    assert_eq!(query::intersect(&moved, &b), Ok(None));
    assert_relative_eq!(
        penetration.separation_b(),
        -penetration.separation_a(),
        epsilon = 1.0e-6
    );
}
