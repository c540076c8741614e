use planar_regions::core::{math::vec2, traits::FuzzyEq};
use planar_regions::{
    AffineTransform, Boundary, Error, Segment, Vector2, WindingRule,
};

fn unit_square() -> Boundary {
    Boundary::from_polygon(&[
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 1.0),
        vec2(0.0, 1.0),
    ])
}

#[test]
fn builder_requires_a_current_point() {
    let mut b = Boundary::new(WindingRule::NonZero);
    assert_eq!(b.line_to(vec2(1.0, 0.0)).unwrap_err(), Error::NoCurrentPoint);
    assert_eq!(
        b.quad_to(vec2(0.5, 1.0), vec2(1.0, 0.0)).unwrap_err(),
        Error::NoCurrentPoint
    );
    assert_eq!(b.close().unwrap_err(), Error::NoCurrentPoint);
    // a failed draw leaves the boundary untouched
    assert!(b.is_empty());

    b.move_to(vec2(0.0, 0.0));
    assert!(b.line_to(vec2(1.0, 0.0)).is_ok());
    assert_eq!(b.segments().len(), 2);
}

#[test]
fn close_returns_to_the_subpath_start() {
    let mut b = Boundary::new(WindingRule::NonZero);
    b.move_to(vec2(2.0, 3.0));
    b.line_to(vec2(5.0, 3.0)).unwrap();
    b.line_to(vec2(5.0, 7.0)).unwrap();
    b.close().unwrap();
    assert_eq!(b.current_point(), Some(vec2(2.0, 3.0)));
}

#[test]
fn cursor_reports_exhaustion_on_every_over_call() {
    let b = unit_square();
    let mut iter = b.iter();
    let mut count = 0;
    while !iter.is_done() {
        iter.current_segment().unwrap();
        iter.advance();
        count += 1;
    }
    // MoveTo + 4 LineTo + Close... from_polygon emits MoveTo, 3 LineTo, Close
    assert_eq!(count, b.segments().len());

    // exhaustion is a persistent state, not a one-shot signal
    for _ in 0..3 {
        assert_eq!(iter.current_segment().unwrap_err(), Error::IteratorExhausted);
        iter.advance();
    }
}

#[test]
fn transformed_iteration_maps_every_point() {
    let b = unit_square();
    let t = {
        let mut t = AffineTransform::translation(10.0, 20.0);
        t.scale(2.0, 2.0);
        t
    };
    let mapped: Vec<Segment<f64>> = b.iter_transformed(t).collect();
    let direct = b.transformed(&t);
    assert_eq!(mapped, direct.segments());
}

#[test]
fn negative_flatness_is_rejected() {
    let b = unit_square();
    assert!(matches!(
        b.iter_flattened(-0.5, 10),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn flattening_leaves_lines_untouched() {
    let b = unit_square();
    let flat: Vec<Segment<f64>> = b.iter_flattened(0.1, 10).unwrap().collect();
    assert_eq!(flat, b.segments());
}

// The flattened polyline of a curve stays within the flatness tolerance of the
// true curve, checked by dense sampling against the chord sequence.
#[test]
fn flattening_converges_to_the_curve() {
    let mut b = Boundary::new(WindingRule::NonZero);
    b.move_to(vec2(0.0, 0.0));
    b.cubic_to(vec2(1.0, 3.0), vec2(3.0, 3.0), vec2(4.0, 0.0))
        .unwrap();

    for &flatness in &[0.5, 0.1, 0.01] {
        let mut points: Vec<Vector2<f64>> = Vec::new();
        for seg in b.iter_flattened(flatness, 16).unwrap() {
            match seg {
                Segment::MoveTo(p) | Segment::LineTo(p) => points.push(p),
                other => panic!("unexpected segment {other:?}"),
            }
        }
        assert!(points.len() >= 2);
        assert!(points[0].fuzzy_eq(vec2(0.0, 0.0)));
        assert!(points.last().unwrap().fuzzy_eq(vec2(4.0, 0.0)));

        // every sampled curve point is within flatness of some chord
        let c = planar_regions::CubicBezier::new(
            vec2(0.0, 0.0),
            vec2(1.0, 3.0),
            vec2(3.0, 3.0),
            vec2(4.0, 0.0),
        );
        for i in 0..=200 {
            let p = c.point_at(i as f64 / 200.0);
            let dist = points
                .windows(2)
                .map(|w| planar_regions::core::math::line_seg_dist_squared(w[0], w[1], p))
                .fold(f64::MAX, f64::min);
            assert!(
                dist.sqrt() <= flatness + 1e-9,
                "flatness {flatness} exceeded: {dist}"
            );
        }
    }
}

#[test]
fn zero_recursion_limit_emits_single_chords() {
    let mut b = Boundary::new(WindingRule::EvenOdd);
    b.move_to(vec2(0.0, 0.0));
    b.quad_to(vec2(2.0, 6.0), vec2(4.0, 0.0)).unwrap();

    let flat: Vec<Segment<f64>> = b.iter_flattened(1e-9, 0).unwrap().collect();
    assert_eq!(
        flat,
        vec![Segment::MoveTo(vec2(0.0, 0.0)), Segment::LineTo(vec2(4.0, 0.0))]
    );
}

#[test]
fn flattening_preserves_structure_and_winding_rule() {
    let mut b = Boundary::new(WindingRule::EvenOdd);
    b.move_to(vec2(0.0, 0.0));
    b.quad_to(vec2(1.0, 2.0), vec2(2.0, 0.0)).unwrap();
    b.close().unwrap();
    b.move_to(vec2(5.0, 5.0));
    b.line_to(vec2(6.0, 5.0)).unwrap();

    let iter = b.iter_flattened(0.25, 10).unwrap();
    assert_eq!(iter.winding_rule(), WindingRule::EvenOdd);

    let flat: Vec<Segment<f64>> = iter.collect();
    let move_count = flat
        .iter()
        .filter(|s| matches!(s, Segment::MoveTo(_)))
        .count();
    let close_count = flat.iter().filter(|s| matches!(s, Segment::Close)).count();
    assert_eq!(move_count, 2);
    assert_eq!(close_count, 1);
    assert!(flat.iter().all(|s| !s.is_curve()));
}

#[test]
fn bounds_track_curve_extents() {
    let mut b = Boundary::new(WindingRule::NonZero);
    b.move_to(vec2(0.0, 0.0));
    b.quad_to(vec2(2.0, 4.0), vec2(4.0, 0.0)).unwrap();

    let (min, max) = b.bounds().unwrap();
    assert!(min.fuzzy_eq(vec2(0.0, 0.0)));
    // the curve peaks at half the control height, not at the control point
    assert!(max.fuzzy_eq(vec2(4.0, 2.0)));

    assert!(Boundary::<f64>::new(WindingRule::NonZero).bounds().is_none());
}

#[test]
fn append_joins_boundaries() {
    let mut a = unit_square();
    let b = Boundary::from_polygon(&[vec2(5.0, 5.0), vec2(6.0, 5.0), vec2(6.0, 6.0)]);
    let before = a.segments().len();
    a.append(&b);
    assert_eq!(a.segments().len(), before + b.segments().len());
}
