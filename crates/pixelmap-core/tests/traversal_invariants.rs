use pixelmap_core::gen::{DiagonalZigzagGen, HilbertGen, MooreGen, ZigzagGen};
use pixelmap_core::{build_gen, Coord, GenKind, PixelMapGen};

fn assert_bijection(g: &dyn PixelMapGen) {
    let s2i = g.pixel_map();
    let i2s = g.sample_map();
    assert_eq!(s2i.len(), g.width() * g.height());
    for i in 0..s2i.len() {
        assert_eq!(i2s[s2i[i]], i);
        assert_eq!(s2i[i2s[i]], i);
    }
    let mut seen = g.pixel_map_copy();
    seen.sort_unstable();
    assert!(seen.iter().copied().eq(0..s2i.len()));
}

#[test]
fn every_generator_is_a_bijection() {
    for depth in 1..=6 {
        assert_bijection(&HilbertGen::new(depth).unwrap());
    }
    for depth in 2..=6 {
        assert_bijection(&MooreGen::new(depth).unwrap());
    }
    for order in 1..=12 {
        assert_bijection(&ZigzagGen::new(order).unwrap());
    }
    for w in 2..=9 {
        for h in 2..=9 {
            assert_bijection(&DiagonalZigzagGen::new(w, h).unwrap());
        }
    }
}

#[test]
fn curves_step_one_cell_at_a_time() {
    for depth in 1..=7 {
        let g = HilbertGen::new(depth).unwrap();
        for w in g.coords().windows(2) {
            assert_eq!(w[0].step_distance(w[1]), 1, "hilbert depth={depth}");
        }
    }
    for depth in 2..=7 {
        let g = MooreGen::new(depth).unwrap();
        for w in g.coords().windows(2) {
            assert_eq!(w[0].step_distance(w[1]), 1, "moore depth={depth}");
        }
        let first = g.coords()[0];
        let last = g.coords()[g.size() - 1];
        assert_eq!(first.step_distance(last), 1, "moore depth={depth} is not closed");
    }
}

#[test]
fn diagonal_zigzag_covers_odd_rectangles() {
    for (w, h) in [(2, 2), (2, 17), (17, 2), (13, 7), (7, 13), (31, 30)] {
        let g = DiagonalZigzagGen::new(w, h).unwrap();
        assert_eq!(g.size(), w * h);
        assert_eq!(g.coords()[0], Coord::new(0, 0));
        assert_eq!(g.coords()[w * h - 1], Coord::new(w - 1, h - 1));
        assert_bijection(&g);
    }
}

#[test]
fn hilbert_depth2_scenario() {
    let g = HilbertGen::new(2).unwrap();
    assert_eq!((g.width(), g.height(), g.size()), (4, 4, 16));
    assert_eq!(g.coords()[0], Coord::new(0, 0));
    let mut cells: Vec<Coord> = g.coords_copy();
    cells.sort_by_key(|c| (c.y, c.x));
    cells.dedup();
    assert_eq!(cells.len(), 16);
    assert_eq!(g.map().max_step(), 1);
}

#[test]
fn zigzag_order3_scenario() {
    let g = ZigzagGen::new(3).unwrap();
    let want = [
        (0, 0),
        (0, 1),
        (1, 0),
        (2, 0),
        (1, 1),
        (0, 2),
        (1, 2),
        (2, 1),
        (2, 2),
    ];
    let got: Vec<(usize, usize)> = g.coords().iter().map(|c| (c.x, c.y)).collect();
    assert_eq!(got, want);
}

#[test]
fn copies_are_detached() {
    let g = HilbertGen::new(3).unwrap();
    let mut copy = g.pixel_map_copy();
    copy.reverse();
    assert_ne!(copy, g.pixel_map());
    assert_eq!(g.pixel_map()[0], 0);
}

#[test]
fn regenerate_is_stable() {
    for kind in [GenKind::Hilbert, GenKind::Moore, GenKind::Zigzag, GenKind::DiagonalZigzag] {
        let mut g = build_gen(kind, 8, 8).unwrap();
        let before = g.map().lut_id_16();
        let lut = g.generate().unwrap().to_vec();
        assert_eq!(lut, g.pixel_map());
        assert_eq!(g.map().lut_id_16(), before, "{kind}");
    }
}

#[test]
fn validation_failures_surface() {
    assert!(build_gen(GenKind::Hilbert, 12, 12).is_err());
    assert!(build_gen(GenKind::Moore, 16, 8).is_err());
    assert!(build_gen(GenKind::DiagonalZigzag, 1, 8).is_err());
    assert!(MooreGen::new(1).is_err());
    let h = HilbertGen::new(2).unwrap();
    assert!(h.validate(32, 32));
    assert!(!h.validate(24, 24));
    assert!(!h.describe().is_empty());
}
