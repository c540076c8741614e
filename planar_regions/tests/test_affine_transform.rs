use planar_regions::core::{math::vec2, traits::FuzzyEq};
use planar_regions::{assert_fuzzy_eq, AffineTransform, Error, TransformClass};
use std::collections::hash_map::DefaultHasher;
use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, PI};
use std::hash::{Hash, Hasher};

fn fuzzy_eq_transform(a: &AffineTransform, b: &AffineTransform) -> bool {
    a.m00.fuzzy_eq(b.m00)
        && a.m10.fuzzy_eq(b.m10)
        && a.m01.fuzzy_eq(b.m01)
        && a.m11.fuzzy_eq(b.m11)
        && a.m02.fuzzy_eq(b.m02)
        && a.m12.fuzzy_eq(b.m12)
}

#[test]
fn general_transform_classification_and_determinant() {
    let t = AffineTransform::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
    assert_fuzzy_eq!(t.determinant(), -2.0);
    let class = t.classify();
    assert!(class.contains(TransformClass::GENERAL_TRANSFORM));
}

#[test]
fn singular_transform_is_not_invertible() {
    let t = AffineTransform::new(1.0, 1.0, 1.0, 1.0, 0.0, 0.0);
    assert_fuzzy_eq!(t.determinant(), 0.0);
    assert_eq!(t.inverse().unwrap_err(), Error::NonInvertible);
    assert_eq!(
        t.inverse_transform_point(vec2(1.0, 2.0)).unwrap_err(),
        Error::NonInvertible
    );
}

#[test]
fn inverse_round_trip_is_identity() {
    let mut t = AffineTransform::translation(3.0, -2.0);
    t.rotate(FRAC_PI_3);
    t.scale(2.0, 0.5);
    t.shear(0.25, 0.0);

    let mut round_trip = t.inverse().unwrap();
    round_trip.concatenate(&t);
    assert!(fuzzy_eq_transform(&round_trip, &AffineTransform::identity()));

    let p = vec2(7.0, -11.0);
    let mapped = t.transform_point(p);
    let back = t.inverse_transform_point(mapped).unwrap();
    assert!(back.fuzzy_eq(p));
}

#[test]
fn classification_consistency() {
    assert!(AffineTransform::<f64>::identity().classify().is_identity());
    assert!(AffineTransform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
        .classify()
        .is_identity());

    // determinant sign tracks the flip flag
    let cases = [
        AffineTransform::scaling(2.0, 3.0),
        AffineTransform::scaling(-1.0, 1.0),
        AffineTransform::rotation(FRAC_PI_4),
        AffineTransform::new(0.0, 1.0, 1.0, 0.0, 0.0, 0.0),
        AffineTransform::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0),
    ];
    for t in cases {
        let flipped = t.classify().contains(TransformClass::FLIP);
        assert_eq!(t.determinant() < 0.0, flipped, "case {t:?}");
    }

    assert_eq!(
        AffineTransform::translation(5.0, 0.0).classify(),
        TransformClass::TRANSLATION
    );
    assert_eq!(
        AffineTransform::scaling(2.0, 2.0).classify(),
        TransformClass::UNIFORM_SCALE
    );
    assert_eq!(
        AffineTransform::scaling(2.0, 3.0).classify(),
        TransformClass::GENERAL_SCALE
    );
    assert!(AffineTransform::rotation(FRAC_PI_3)
        .classify()
        .contains(TransformClass::GENERAL_ROTATION));
}

#[test]
fn quadrant_rotation_is_exact() {
    let quarter = AffineTransform::<f64>::quadrant_rotation(1);
    assert_eq!(quarter.transform_point(vec2(1.0, 0.0)), vec2(0.0, 1.0));
    assert!(quarter
        .classify()
        .contains(TransformClass::QUADRANT_ROTATION));

    // four quarter turns compose back to identity exactly
    let mut t = AffineTransform::<f64>::identity();
    for _ in 0..4 {
        t.concatenate(&quarter);
    }
    assert!(t.is_identity());

    // the trigonometric path carries sin(pi) residue and is classified as a general rotation
    let trig = AffineTransform::rotation(PI);
    assert!(trig.classify().contains(TransformClass::GENERAL_ROTATION));
    assert!(AffineTransform::<f64>::quadrant_rotation(2)
        .classify()
        .contains(TransformClass::QUADRANT_ROTATION));
}

#[test]
fn concatenation_is_associative() {
    let a = AffineTransform::rotation(0.3);
    let b = AffineTransform::scaling(2.0, 0.5);
    let c = AffineTransform::translation(4.0, -1.0);

    let ab_c = a.then(&b).then(&c);
    let a_bc = a.then(&b.then(&c));
    assert!(fuzzy_eq_transform(&ab_c, &a_bc));
}

#[test]
fn concatenate_applies_other_first() {
    let mut t = AffineTransform::translation(10.0, 0.0);
    t.concatenate(&AffineTransform::scaling(2.0, 2.0));
    // scale then translate
    assert!(t.transform_point(vec2(1.0, 1.0)).fuzzy_eq(vec2(12.0, 2.0)));

    let mut t = AffineTransform::translation(10.0, 0.0);
    t.pre_concatenate(&AffineTransform::scaling(2.0, 2.0));
    // translate then scale
    assert!(t.transform_point(vec2(1.0, 1.0)).fuzzy_eq(vec2(22.0, 2.0)));
}

#[test]
fn delta_transform_ignores_translation() {
    let mut t = AffineTransform::translation(100.0, 200.0);
    t.scale(3.0, 3.0);
    assert!(t.delta_transform(vec2(1.0, 1.0)).fuzzy_eq(vec2(3.0, 3.0)));
}

#[test]
fn transform_points_maps_slice_in_place() {
    let t = AffineTransform::translation(1.0, 2.0);
    let mut pts = vec![vec2(0.0, 0.0), vec2(5.0, 5.0)];
    t.transform_points(&mut pts);
    assert!(pts[0].fuzzy_eq(vec2(1.0, 2.0)));
    assert!(pts[1].fuzzy_eq(vec2(6.0, 7.0)));

    t.inverse_transform_points(&mut pts).unwrap();
    assert!(pts[0].fuzzy_eq(vec2(0.0, 0.0)));
    assert!(pts[1].fuzzy_eq(vec2(5.0, 5.0)));
}

#[test]
fn hash_is_consistent_with_equality() {
    fn hash_of(t: &AffineTransform) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    let a = AffineTransform::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
    let b = AffineTransform::new(2.0, 3.0, 4.0, 5.0, 6.0, 7.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    // negative zero compares equal to zero so it must hash equally too
    let z = AffineTransform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    let nz = AffineTransform::new(1.0, -0.0, 0.0, 1.0, -0.0, 0.0);
    assert_eq!(z, nz);
    assert_eq!(hash_of(&z), hash_of(&nz));
}

#[test]
fn rotation_about_fixes_the_center() {
    let center = vec2(3.0, 4.0);
    let t = AffineTransform::rotation_about(FRAC_PI_3, center);
    assert!(t.transform_point(center).fuzzy_eq(center));
    // a point at distance 1 stays at distance 1
    let mapped = t.transform_point(vec2(4.0, 4.0));
    assert_fuzzy_eq!((mapped - center).length(), 1.0);
}
