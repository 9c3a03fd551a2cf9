use super::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use super::*;
use crate::boundary::Point3;
use crate::error::MeshError;
use nalgebra::vector;

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

#[test]
fn rectangle_signed_area() {
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    assert!((signed_area(&square) - 12.0).abs() < 1e-12);
    assert!((signed_area_twice(&square) - 24.0).abs() < 1e-12);
}

#[test]
fn collinear_loop_is_degenerate() {
    let mut lp = Loop2::new(pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
    assert_eq!(normalize_winding(&mut lp), Err(MeshError::DegeneratePolygon));
}

#[test]
fn clockwise_square_becomes_the_ccw_square() {
    let mut lp = Loop2::new(pts(&[(0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0)]));
    assert_eq!(normalize_winding(&mut lp).unwrap(), Winding::Clockwise);
    assert_eq!(
        lp.points,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)])
    );
    assert_eq!(lp.source, vec![0, 3, 2, 1]);
    assert!(signed_area(&lp.points) > 0.0);
}

#[test]
fn ccw_loop_is_untouched() {
    let square = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    let mut lp = Loop2::new(square.clone());
    assert_eq!(
        normalize_winding(&mut lp).unwrap(),
        Winding::CounterClockwise
    );
    assert_eq!(lp.points, square);
    assert_eq!(lp.source, vec![0, 1, 2, 3]);
}

#[test]
fn classify_concave_pentagon() {
    // (2,2) is the notch.
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
    let n = p.len();
    let classes: Vec<VertexClass> = (0..n)
        .map(|i| classify(p[(i + n - 1) % n], p[i], p[(i + 1) % n]))
        .collect();
    assert_eq!(
        classes,
        vec![
            VertexClass::Convex,
            VertexClass::Convex,
            VertexClass::Convex,
            VertexClass::Reflex,
            VertexClass::Convex,
        ]
    );
    assert_eq!(
        classify(p[0], Point2::new(2.0, 0.0), p[1]),
        VertexClass::Collinear
    );
}

#[test]
fn point_in_triangle_is_closed() {
    let (a, b, c) = (vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 3.0]);
    let eps = GeomCfg::default().eps_inside;
    assert!(point_in_triangle(a, b, c, vector![1.0, 1.0], eps));
    assert!(point_in_triangle(a, b, c, vector![4.0, 0.0], eps)); // corner
    assert!(point_in_triangle(a, b, c, vector![2.0, 0.0], eps)); // edge ab
    assert!(point_in_triangle(a, b, c, vector![0.0, 1.5], eps)); // edge ca
    assert!(point_in_triangle(a, b, c, vector![2.0, 1.5], eps)); // hypotenuse midpoint
    assert!(!point_in_triangle(a, b, c, vector![3.0, 3.0], eps));
    assert!(!point_in_triangle(a, b, c, vector![-0.1, 1.0], eps));
    assert!(!point_in_triangle(a, b, c, vector![2.0, -1e-6], eps));
}

#[test]
fn projection_picks_dominant_plane_and_keeps_winding() {
    // Rectangle in the plane x = 5, counter-clockwise seen from +x.
    let loop3 = vec![
        Point3::new(5.0, 0.0, 0.0),
        Point3::new(5.0, 4.0, 0.0),
        Point3::new(5.0, 4.0, 3.0),
        Point3::new(5.0, 0.0, 3.0),
    ];
    let (plane, flat) = project_loop(&loop3);
    assert_eq!(plane, Plane::Yz);
    assert!((signed_area(&flat) - 12.0).abs() < 1e-12);

    // Same rectangle walked the other way stays clockwise after projection.
    let reversed: Vec<Point3> = loop3.iter().rev().copied().collect();
    let (plane, flat) = project_loop(&reversed);
    assert_eq!(plane, Plane::Yz);
    assert!((signed_area(&flat) + 12.0).abs() < 1e-12);

    // Tilted plane z = x: normal (-1, 0, 1) ties x and z; ties prefer XY.
    let tilted = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert_eq!(dominant_plane(&tilted), Plane::Xy);
    let n = newell_normal(&tilted);
    assert!((n.x + 2.0).abs() < 1e-12 && n.y.abs() < 1e-12 && (n.z - 2.0).abs() < 1e-12);
}

#[test]
fn star_polygons_are_ccw_and_reproducible() {
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 40 },
        ..StarCfg::default()
    };
    for index in 0..50 {
        let tok = ReplayToken::new(7, index);
        let a = draw_star_polygon(cfg, tok);
        let b = draw_star_polygon(cfg, tok);
        assert_eq!(a, b);
        assert!(a.len() >= 3);
        assert!(signed_area(&a) > 0.0, "draw {index} not counter-clockwise");
    }
}

#[test]
fn star_angles_increase_even_with_oversized_jitter() {
    // 0.9 is clamped to 0.45 of the spacing (less for n = 3).
    for n in 3..40 {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            angle_jitter_frac: 0.9,
            ..StarCfg::default()
        };
        let poly = draw_star_polygon(cfg, ReplayToken::new(11, n as u64));
        let mut turn = 0.0;
        for k in 0..n {
            let (a, b) = (poly[k], poly[(k + 1) % n]);
            let step = cross(a, b).atan2(a.dot(&b));
            assert!(step > 0.0 && step < std::f64::consts::PI, "n = {n}, gap {k}");
            turn += step;
        }
        assert!((turn - std::f64::consts::TAU).abs() < 1e-9, "n = {n} winds {turn}");
    }
}
