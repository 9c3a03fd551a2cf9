//! Triangulate a notched pentagon face and print the index buffer.
//!
//! Usage:
//!   cargo run -p facemesh --example notched_face

use facemesh::prelude::*;

const FACE: &str = "ISO-10303-21;
DATA;
#1 = CARTESIAN_POINT('', (0.0, 0.0, 0.0));
#2 = CARTESIAN_POINT('', (4.0, 0.0, 0.0));
#3 = CARTESIAN_POINT('', (4.0, 4.0, 0.0));
#4 = CARTESIAN_POINT('', (2.0, 2.0, 0.0));
#5 = CARTESIAN_POINT('', (0.0, 4.0, 0.0));
#11 = VERTEX_POINT('', #1);
#12 = VERTEX_POINT('', #2);
#13 = VERTEX_POINT('', #3);
#14 = VERTEX_POINT('', #4);
#15 = VERTEX_POINT('', #5);
#21 = EDGE_CURVE('', #11, #12, #60, .T.);
#22 = EDGE_CURVE('', #12, #13, #60, .T.);
#23 = EDGE_CURVE('', #13, #14, #60, .T.);
#24 = EDGE_CURVE('', #14, #15, #60, .T.);
#25 = EDGE_CURVE('', #15, #11, #60, .T.);
#31 = ORIENTED_EDGE('', *, *, #21, .T.);
#32 = ORIENTED_EDGE('', *, *, #22, .T.);
#33 = ORIENTED_EDGE('', *, *, #23, .T.);
#34 = ORIENTED_EDGE('', *, *, #24, .T.);
#35 = ORIENTED_EDGE('', *, *, #25, .T.);
#40 = EDGE_LOOP('', (#31, #32, #33, #34, #35));
#41 = FACE_OUTER_BOUND('', #40, .T.);
#60 = LINE('', #1, #61);
#42 = ADVANCED_FACE('', (#41), #50, .T.);
ENDSEC;
END-ISO-10303-21;
";

fn main() {
    match mesh_from_step(FACE, GeomCfg::default(), ClipCfg::default()) {
        Ok(mesh) => {
            println!("vertices: {}", mesh.vertex_count());
            for t in mesh.triangles() {
                println!("{:?}", t);
            }
            println!("area: {:.3}", mesh.area());
        }
        Err(e) => eprintln!("error: {e}"),
    }
}
