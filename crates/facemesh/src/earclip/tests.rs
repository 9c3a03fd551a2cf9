use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::api::triangulate_2d_with;
use crate::error::MeshError;
use crate::exec::Serial;
use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use crate::geom2::{
    cross, normalize_winding, signed_area, GeomCfg, Loop2, Point2, VertexClass, Winding,
};

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn tri2d(points: &[(f64, f64)], clip: ClipCfg) -> crate::error::Result<Mesh> {
    triangulate_2d_with(&Serial, &pts(points), GeomCfg::default(), clip)
}

fn tri_coords(mesh: &Mesh) -> Vec<[[f32; 3]; 3]> {
    mesh.triangles()
        .map(|t| t.map(|i| mesh.position(i as usize)))
        .collect()
}

const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)];
const PENTAGON: [(f64, f64); 5] = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)];

#[test]
fn topology_splice_keeps_one_cycle() {
    let mut t = Topology::new(5);
    assert_eq!((t.prev(0), t.next(4)), (4, 0));
    t.splice_out(2);
    assert_eq!((t.next(1), t.prev(3)), (3, 1));
    t.splice_out(0);
    assert_eq!((t.next(4), t.prev(1)), (1, 4));
    assert_eq!(t.active_count(), 3);
    assert_eq!(t.active_slots(), vec![1, 3, 4]);
    // Walk the remaining cycle once.
    let mut seen = vec![1];
    let mut j = t.next(1);
    while j != 1 {
        seen.push(j);
        j = t.next(j);
    }
    assert_eq!(seen, vec![1, 3, 4]);
}

#[test]
fn square_gives_two_triangles() {
    let mesh = tri2d(&SQUARE, ClipCfg::default()).unwrap();
    assert_eq!(mesh.indices, vec![3, 0, 1, 3, 1, 2]);
    assert!((mesh.area() - 12.0).abs() < 1e-9);
}

#[test]
fn clockwise_square_matches_ccw_square() {
    let cw = [(0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0)];
    let mesh_cw = tri2d(&cw, ClipCfg::default()).unwrap();
    let mesh_ccw = tri2d(&SQUARE, ClipCfg::default()).unwrap();
    // Positions stay in caller order; indices follow them.
    assert_eq!(mesh_cw.position(1), [0.0, 3.0, 0.0]);
    assert_eq!(mesh_cw.indices, vec![1, 0, 3, 1, 3, 2]);
    assert_eq!(tri_coords(&mesh_cw), tri_coords(&mesh_ccw));
}

#[test]
fn concave_pentagon_never_clips_reflex_vertex() {
    let mut lp = Loop2::new(pts(&PENTAGON));
    normalize_winding(&mut lp).unwrap();
    let mut ec = EarClipper::new(&lp, GeomCfg::default(), ClipCfg::default(), &Serial);
    assert_eq!(ec.status(3).class, VertexClass::Reflex);
    let mut curs = Vec::new();
    while ec.state() == ClipState::Running {
        let st = ec.status(3);
        if st.class == VertexClass::Reflex {
            assert!(!st.ear, "reflex vertex flagged in round {}", ec.round());
        }
        let t = ec.step().unwrap().unwrap();
        curs.push(t.cur);
    }
    assert_eq!(ec.state(), ClipState::Done);
    assert_eq!(curs, vec![2, 1, 0]);
    assert!(!curs.contains(&3));

    let mesh = tri2d(&PENTAGON, ClipCfg::default()).unwrap();
    assert_eq!(mesh.indices, vec![1, 2, 3, 0, 1, 3, 4, 0, 3]);
    assert!((mesh.area() - 12.0).abs() < 1e-9);
}

#[test]
fn point_on_ear_edge_blocks_it() {
    // (2,2) sits on the hypotenuse of the ear at (0,0).
    let lp = Loop2::new(pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 2.0), (0.0, 4.0)]));
    let topo = Topology::new(4);
    let eps = GeomCfg::default().eps_inside;
    assert_eq!(blocker(&lp.points, &topo, 0, eps), Some(2));
    let st = validate_slot(&lp.points, &topo, 0, eps);
    assert_eq!(st.class, VertexClass::Convex);
    assert!(!st.ear);
    assert_eq!(validate_slot(&lp.points, &topo, 2, eps).class, VertexClass::Collinear);

    let mesh = clip_ears(&Serial, &lp, vec![0.0; 12], GeomCfg::default(), ClipCfg::default()).unwrap();
    assert_eq!(mesh.indices, vec![0, 1, 2, 3, 0, 2]);
}

#[test]
fn full_and_neighbor_modes_agree_on_fixed_cases() {
    for poly in [&SQUARE[..], &PENTAGON[..]] {
        let a = tri2d(poly, ClipCfg::default()).unwrap();
        let b = tri2d(poly, ClipCfg::full()).unwrap();
        assert_eq!(a, b);
    }
}

/// Slots 5 and 7 touch the opposite edges (6, 7) and (3, 4). After slot 5
/// is clipped, the only ear is slot 7, which is not a neighbor of slot 5 and
/// still carries its old "blocked by slot 5" flag.
const TOUCHING: [(f64, f64); 8] = [
    (4.0, 2.0),
    (3.0, 4.0),
    (0.0, 0.0),
    (4.0, 0.0),
    (2.0, 2.0),
    (3.0, 2.0),
    (3.0, 3.0),
    (3.0, 1.0),
];

#[test]
fn stale_flags_fall_back_to_full_revalidation() {
    let mut lp = Loop2::new(pts(&TOUCHING));
    assert_eq!(normalize_winding(&mut lp).unwrap(), Winding::CounterClockwise);
    let mut ec = EarClipper::new(&lp, GeomCfg::default(), ClipCfg::default(), &Serial);
    assert_eq!(ec.step().unwrap().map(|t| t.cur), Some(5));

    // No active slot is flagged, yet slot 7 is a true ear.
    let flagged: Vec<usize> = ec
        .topology()
        .active_slots()
        .into_iter()
        .filter(|&i| ec.status(i).ear)
        .collect();
    assert!(flagged.is_empty());
    assert_eq!(ec.status(7).class, VertexClass::Convex);
    let eps = GeomCfg::default().eps_inside;
    assert!(validate_slot(&lp.points, ec.topology(), 7, eps).ear);

    let t = ec.step().unwrap().unwrap();
    assert_eq!(t, Triangle { prev: 6, cur: 7, next: 0 });
    while ec.step().unwrap().is_some() {}
    assert_eq!(ec.state(), ClipState::Done);
    assert_eq!(ec.topology().active_count(), 2);

    let neighbors = tri2d(&TOUCHING, ClipCfg::default()).unwrap();
    let full = tri2d(&TOUCHING, ClipCfg::full()).unwrap();
    assert_eq!(neighbors.triangle_count(), 6);
    assert_eq!(full.triangle_count(), neighbors.triangle_count());
    assert!((neighbors.area() - 7.5).abs() < 1e-9);
    assert!((full.area() - 7.5).abs() < 1e-9);
}

#[test]
fn repeated_point_runs_out_of_ears() {
    // Slot 4 repeats slot 0, which blocks every remaining candidate after
    // the first clip.
    let mut lp = Loop2::new(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]));
    normalize_winding(&mut lp).unwrap();
    for clip in [ClipCfg::default(), ClipCfg::full()] {
        let err = clip_ears(&Serial, &lp, vec![0.0; 15], GeomCfg::default(), clip).unwrap_err();
        assert_eq!(err, MeshError::NoEarFound { round: 1, active: 4 });
    }
}

#[test]
fn failed_clipper_stays_failed() {
    let mut lp = Loop2::new(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]));
    normalize_winding(&mut lp).unwrap();
    let mut ec = EarClipper::new(&lp, GeomCfg::default(), ClipCfg::default(), &Serial);
    assert!(ec.step().unwrap().is_some());
    assert!(ec.step().is_err());
    assert_eq!(ec.state(), ClipState::Failed);
    assert!(ec.step().is_err());
}

#[test]
fn emitter_refuses_partial_mesh() {
    let mut em = TriangleEmitter::new(4);
    assert_eq!(em.expected(), 2);
    em.push(Triangle { prev: 3, cur: 0, next: 1 });
    assert_eq!(
        em.finish(vec![0.0; 12]),
        Err(MeshError::IncompleteMesh { expected: 2, emitted: 1 })
    );
}

fn star(seed: u64, n: usize) -> Vec<Point2> {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    draw_star_polygon(cfg, ReplayToken::new(seed, 0))
}

/// Checks the mesh of a CCW `poly` (indices are indices into `poly`).
fn check_triangulation(poly: &[Point2], mesh: &Mesh) {
    let n = poly.len();
    assert_eq!(mesh.triangle_count(), n - 2);
    let mut curs = HashSet::new();
    let mut total = 0.0;
    for [a, b, c] in mesh.triangles() {
        let (a, b, c) = (poly[a as usize], poly[b as usize], poly[c as usize]);
        let twice = cross(b - a, c - a);
        assert!(twice > 0.0, "clockwise triangle emitted");
        total += 0.5 * twice;
    }
    for t in mesh.indices.chunks_exact(3) {
        assert!(curs.insert(t[1]), "vertex {} clipped twice", t[1]);
    }
    assert_eq!(curs.len(), n - 2);
    let area = signed_area(poly);
    assert!((total - area).abs() <= 1e-9 * area.abs().max(1.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn star_polygons_triangulate(seed in any::<u64>(), n in 3usize..80) {
        let poly = star(seed, n);
        for clip in [ClipCfg::default(), ClipCfg::full()] {
            let mesh = triangulate_2d_with(&Serial, &poly, GeomCfg::default(), clip).unwrap();
            check_triangulation(&poly, &mesh);
        }
    }

    #[test]
    fn reversed_input_matches_rotated_ccw_input(seed in any::<u64>(), n in 3usize..60) {
        let poly = star(seed, n);
        let cw: Vec<Point2> = poly.iter().rev().copied().collect();
        // Normalizing `cw` keeps its slot 0 (the last CCW point) and walks CCW from there.
        let mut rotated = vec![poly[n - 1]];
        rotated.extend_from_slice(&poly[..n - 1]);
        let a = triangulate_2d_with(&Serial, &cw, GeomCfg::default(), ClipCfg::default()).unwrap();
        let b = triangulate_2d_with(&Serial, &rotated, GeomCfg::default(), ClipCfg::default()).unwrap();
        prop_assert_eq!(tri_coords(&a), tri_coords(&b));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn threaded_backend_matches_serial() {
    use crate::exec::Threaded;
    let backend = Threaded { min_len: 1 };
    for seed in 0..16 {
        let poly = star(seed, 300);
        for clip in [ClipCfg::default(), ClipCfg::full()] {
            let a = triangulate_2d_with(&Serial, &poly, GeomCfg::default(), clip).unwrap();
            let b = triangulate_2d_with(&backend, &poly, GeomCfg::default(), clip).unwrap();
            assert_eq!(a, b);
        }
    }
}
