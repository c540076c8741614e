use planar_regions::core::{math::vec2, traits::FuzzyEq};
use planar_regions::{
    Arc, ArcClosure, CubicBezier, Ellipse, Rect, RoundRect, Segment, Shape, Vector2,
};

#[test]
fn rect_predicates() {
    let r = Rect::new(1.0, 2.0, 4.0, 3.0);
    assert!(!r.is_empty());
    assert!(r.contains_point(vec2(3.0, 3.5)));
    // the boundary is inside for the closed containment test
    assert!(r.contains_point(vec2(1.0, 2.0)));
    assert!(r.contains_point(vec2(5.0, 5.0)));
    assert!(!r.contains_point(vec2(0.9, 3.0)));

    assert!(r.contains_rect(&Rect::new(2.0, 3.0, 1.0, 1.0)));
    assert!(!r.contains_rect(&Rect::new(2.0, 3.0, 10.0, 1.0)));

    assert!(r.intersects_rect(&Rect::new(4.0, 4.0, 4.0, 4.0)));
    // zero-area overlap (shared edge only) does not count as intersection
    assert!(!r.intersects_rect(&Rect::new(5.0, 2.0, 2.0, 2.0)));
    assert!(!r.intersects_rect(&Rect::new(10.0, 10.0, 1.0, 1.0)));

    let (min, max) = r.bounds().unwrap();
    assert!(min.fuzzy_eq(vec2(1.0, 2.0)));
    assert!(max.fuzzy_eq(vec2(5.0, 5.0)));
}

#[test]
fn degenerate_rect_is_empty() {
    let r = Rect::new(1.0, 1.0, 0.0, 5.0);
    assert!(r.is_empty());
    assert!(!r.contains_point(vec2(1.0, 3.0)));
    assert!(!r.intersects_rect(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(r.bounds().is_none());

    let n = Rect::new(1.0, 1.0, -2.0, 5.0);
    assert!(n.is_empty());
}

#[test]
fn ellipse_containment_is_the_normalized_disc_test() {
    let e = Ellipse::new(0.0, 0.0, 8.0, 4.0);
    // center and interior
    assert!(e.contains_point(vec2(4.0, 2.0)));
    assert!(e.contains_point(vec2(7.0, 2.0)));
    // on-axis boundary points are inside (closed test)
    assert!(e.contains_point(vec2(8.0, 2.0)));
    assert!(e.contains_point(vec2(4.0, 0.0)));
    // bounding box corner is well outside
    assert!(!e.contains_point(vec2(0.0, 0.0)));
    assert!(!e.contains_point(vec2(7.9, 0.1)));
}

#[test]
fn ellipse_rect_intersection_uses_the_nearest_point() {
    let e = Ellipse::new(0.0, 0.0, 8.0, 4.0);
    // rect whose nearest point to the center is inside the ellipse
    assert!(e.intersects_rect(&Rect::new(6.0, 1.0, 10.0, 10.0)));
    // rect sharing the ellipse's bounding box corner but missing the ellipse
    assert!(!e.intersects_rect(&Rect::new(7.5, 3.5, 2.0, 2.0)));
    // rect containing the whole ellipse
    assert!(e.intersects_rect(&Rect::new(-1.0, -1.0, 20.0, 20.0)));
    // rect inside the ellipse
    assert!(e.intersects_rect(&Rect::new(3.5, 1.5, 1.0, 1.0)));
}

#[test]
fn ellipse_boundary_is_four_cubics_near_the_true_curve() {
    let e = Ellipse::new(1.0, 2.0, 6.0, 4.0);
    let b = e.boundary();
    let cubic_count = b
        .segments()
        .iter()
        .filter(|s| matches!(s, Segment::CubicTo(..)))
        .count();
    assert_eq!(cubic_count, 4);
    assert_eq!(b.segments().len(), 6);

    // every point of the approximation satisfies the implicit equation closely
    let center = vec2(4.0, 4.0);
    let (rx, ry) = (3.0, 2.0);
    let mut prev: Option<Vector2<f64>> = None;
    for seg in b.segments() {
        match *seg {
            Segment::MoveTo(p) => prev = Some(p),
            Segment::CubicTo(c1, c2, end) => {
                let c = CubicBezier::new(prev.unwrap(), c1, c2, end);
                for i in 0..=20 {
                    let p = c.point_at(i as f64 / 20.0);
                    let nx = (p.x - center.x) / rx;
                    let ny = (p.y - center.y) / ry;
                    // the quarter-arc cubic's max radial error is ~2.7e-4 of the radius,
                    // which doubles in the implicit-equation metric
                    let err = (nx * nx + ny * ny - 1.0).abs();
                    assert!(err < 6e-4, "ellipse approximation error {err}");
                }
                prev = Some(end);
            }
            _ => {}
        }
    }
}

#[test]
fn arc_start_point_follows_the_angle_convention() {
    // y-down frame: 0 degrees is the rightmost point, angles sweep counterclockwise
    let pie = Arc::new(1.0, 2.0, 4.0, 6.0, 0.0, 90.0, ArcClosure::Pie);
    assert!(pie.start_point().fuzzy_eq(vec2(5.0, 5.0)));
    assert!(pie.end_point().fuzzy_eq(vec2(3.0, 2.0)));

    let from_top = Arc::new(1.0, 2.0, 4.0, 6.0, 90.0, 90.0, ArcClosure::Pie);
    assert!(from_top.start_point().fuzzy_eq(vec2(3.0, 2.0)));
    assert!(from_top.end_point().fuzzy_eq(vec2(1.0, 5.0)));
}

#[test]
fn arc_contains_angle_handles_wrap_and_negative_extents() {
    let a = Arc::new(0.0, 0.0, 2.0, 2.0, 350.0, 20.0, ArcClosure::Open);
    assert!(a.contains_angle(355.0));
    assert!(a.contains_angle(5.0));
    assert!(!a.contains_angle(180.0));

    let neg = Arc::new(0.0, 0.0, 2.0, 2.0, 30.0, -60.0, ArcClosure::Open);
    assert!(neg.contains_angle(0.0));
    assert!(neg.contains_angle(-20.0));
    assert!(!neg.contains_angle(45.0));

    let full = Arc::new(0.0, 0.0, 2.0, 2.0, 123.0, 360.0, ArcClosure::Open);
    assert!(full.contains_angle(7.0));
}

#[test]
fn pie_containment_respects_the_sweep() {
    // first-quadrant quarter pie of the unit circle about the origin
    let pie = Arc::new(-1.0, -1.0, 2.0, 2.0, 0.0, 90.0, ArcClosure::Pie);
    // y-down: the swept quadrant has x >= 0, y <= 0
    assert!(pie.contains_point(vec2(0.3, -0.3)));
    assert!(pie.contains_point(vec2(0.0, 0.0)));
    assert!(!pie.contains_point(vec2(0.3, 0.3)));
    assert!(!pie.contains_point(vec2(-0.3, -0.3)));
    assert!(!pie.contains_point(vec2(0.9, -0.9)));
}

#[test]
fn chord_containment_covers_the_circular_segment() {
    // half disc: chord from (1, 0) to (-1, 0), arc through (0, -1)
    let chord = Arc::new(-1.0, -1.0, 2.0, 2.0, 0.0, 180.0, ArcClosure::Chord);
    assert!(chord.contains_point(vec2(0.0, -0.5)));
    assert!(chord.contains_point(vec2(0.5, -0.1)));
    assert!(!chord.contains_point(vec2(0.0, 0.5)));
    assert!(!chord.contains_point(vec2(0.0, 1.5)));

    // open arcs share the chord containment semantics (the outline still encloses
    // the chord-cut region)
    let open = Arc::new(-1.0, -1.0, 2.0, 2.0, 0.0, 180.0, ArcClosure::Open);
    assert!(open.contains_point(vec2(0.0, -0.5)));
    assert!(!open.contains_point(vec2(0.0, 0.5)));
}

#[test]
fn arc_boundary_stays_near_the_true_ellipse() {
    let a = Arc::new(0.0, 0.0, 10.0, 6.0, 30.0, 250.0, ArcClosure::Pie);
    let b = a.boundary();
    let center = vec2(5.0, 3.0);
    let (rx, ry) = (5.0, 3.0);

    let mut prev: Option<Vector2<f64>> = None;
    let mut cubic_count = 0;
    for seg in b.segments() {
        match *seg {
            Segment::MoveTo(p) | Segment::LineTo(p) => prev = Some(p),
            Segment::CubicTo(c1, c2, end) => {
                cubic_count += 1;
                let c = CubicBezier::new(prev.unwrap(), c1, c2, end);
                for i in 0..=20 {
                    let p = c.point_at(i as f64 / 20.0);
                    let nx = (p.x - center.x) / rx;
                    let ny = (p.y - center.y) / ry;
                    assert!((nx * nx + ny * ny - 1.0).abs() < 5e-4);
                }
                prev = Some(end);
            }
            Segment::Close => {}
            other => panic!("unexpected segment {other:?}"),
        }
    }
    // 250 degrees covers three 90 degree spans
    assert_eq!(cubic_count, 3);
}

#[test]
fn pie_rect_predicates() {
    let pie = Arc::new(-1.0, -1.0, 2.0, 2.0, 0.0, 90.0, ArcClosure::Pie);
    assert!(pie.contains_rect(&Rect::new(0.1, -0.5, 0.3, 0.3)));
    assert!(!pie.contains_rect(&Rect::new(-0.5, -0.5, 1.0, 1.0)));

    assert!(pie.intersects_rect(&Rect::new(-0.5, -0.5, 1.0, 1.0)));
    // rect in the unswept quadrants
    assert!(!pie.intersects_rect(&Rect::new(-0.9, 0.1, 0.5, 0.5)));
    // rect outside the circle entirely
    assert!(!pie.intersects_rect(&Rect::new(2.0, 2.0, 1.0, 1.0)));
    // rect straddling the curved edge
    assert!(pie.intersects_rect(&Rect::new(0.5, -1.5, 1.0, 1.0)));
}

#[test]
fn round_rect_corner_notch_is_outside() {
    let rr = RoundRect::new(0.0, 0.0, 10.0, 8.0, 4.0, 4.0);
    // deep interior
    assert!(rr.contains_point(vec2(5.0, 4.0)));
    // edge midpoints
    assert!(rr.contains_point(vec2(5.0, 0.0)));
    assert!(rr.contains_point(vec2(0.0, 4.0)));
    // the sharp corner is notched away
    assert!(!rr.contains_point(vec2(0.0, 0.0)));
    assert!(!rr.contains_point(vec2(0.3, 0.3)));
    // corner arc sweet spot: (2, 2) is the corner center, offset by r/sqrt(2)
    let d = 2.0 - 2.0 / 2.0_f64.sqrt() + 0.05;
    assert!(rr.contains_point(vec2(d + 0.1, d + 0.1)));

    // a small rect tucked fully into the notch neither intersects nor is contained
    let notch = Rect::new(0.0, 0.0, 0.25, 0.25);
    assert!(!rr.intersects_rect(&notch));
    assert!(!rr.contains_rect(&notch));

    // a rect spanning the middle intersects and is contained
    let middle = Rect::new(2.0, 2.0, 6.0, 4.0);
    assert!(rr.intersects_rect(&middle));
    assert!(rr.contains_rect(&middle));
}

#[test]
fn round_rect_arc_dimensions_clamp() {
    // oversized corner radii degrade to a full ellipse
    let rr = RoundRect::new(0.0, 0.0, 4.0, 2.0, 100.0, 100.0);
    let e = Ellipse::new(0.0, 0.0, 4.0, 2.0);
    for (px, py) in [
        (2.0, 1.0),
        (0.2, 0.2),
        (3.8, 1.8),
        (0.0, 1.0),
        (2.0, 0.0),
        (0.5, 0.5),
    ] {
        assert_eq!(
            rr.contains_point(vec2(px, py)),
            e.contains_point(vec2(px, py)),
            "({px}, {py})"
        );
    }
}

#[test]
fn round_rect_with_zero_radii_is_a_plain_rect() {
    let rr = RoundRect::new(1.0, 2.0, 4.0, 3.0, 0.0, 0.0);
    assert!(rr.contains_point(vec2(1.0, 2.0)));
    assert!(rr.contains_point(vec2(5.0, 5.0)));
    let b = rr.boundary();
    assert!(b.segments().iter().all(|s| !s.is_curve()));
}

#[test]
fn boundary_flattened_yields_only_lines() {
    let e = Ellipse::new(0.0, 0.0, 4.0, 4.0);
    let flat = e.boundary_flattened(0.001, 16).unwrap();
    assert!(!flat.is_empty());
    assert!(flat.segments().iter().all(|s| !s.is_curve()));

    // the flattened polygon area converges on the disc area
    let mut area = 0.0;
    let mut prev: Option<Vector2<f64>> = None;
    let mut first: Option<Vector2<f64>> = None;
    for seg in flat.segments() {
        match *seg {
            Segment::MoveTo(p) => {
                prev = Some(p);
                first = Some(p);
            }
            Segment::LineTo(p) => {
                let q = prev.unwrap();
                area += q.x * p.y - p.x * q.y;
                prev = Some(p);
            }
            Segment::Close => {
                let (q, f) = (prev.unwrap(), first.unwrap());
                area += q.x * f.y - f.x * q.y;
            }
            _ => {}
        }
    }
    area = (area / 2.0).abs();
    assert!((area - std::f64::consts::PI * 4.0).abs() < 0.05);
}
