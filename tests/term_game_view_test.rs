use termino::core::{ActiveSnapshot, GameSnapshot, GameState};
use termino::term::{CellStyle, FrameBuffer, GameView, Viewport};
use termino::types::{PieceKind, Rotation, VISIBLE_START};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn render(view: &GameView, snap: &GameSnapshot, vp: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(snap, vp, &mut fb);
    fb
}

fn text_at(fb: &FrameBuffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len).filter_map(|cx| fb.get(cx, y)).map(|c| c.ch).collect()
}

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| text_at(fb, 0, y, fb.width()).contains(needle))
}

#[test]
fn well_frame_is_22_by_22() {
    let view = GameView::new();
    let fb = render(&view, &GameState::new(1).snapshot(), VP);
    let (x, y) = view.well_origin(VP);

    assert_eq!(fb.get(x, y).unwrap().ch, '┌');
    assert_eq!(fb.get(x + 21, y).unwrap().ch, '┐');
    assert_eq!(fb.get(x, y + 21).unwrap().ch, '└');
    assert_eq!(fb.get(x + 21, y + 21).unwrap().ch, '┘');
}

#[test]
fn locked_cell_is_two_columns_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[39][0] = Some(PieceKind::Z);
    snap.active = None;
    snap.ghost_y = None;

    let view = GameView::new();
    let fb = render(&view, &snap, VP);
    let (x, y) = view.cell_origin(VP, 0, 39).unwrap();
    let left = fb.get(x, y).unwrap();
    let right = fb.get(x + 1, y).unwrap();
    assert_eq!((left.ch, right.ch), ('█', '█'));
    assert_eq!(left.style.fg.r, PieceKind::Z.color().0);
}

#[test]
fn hidden_rows_are_not_drawn() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[VISIBLE_START as usize - 1] = [Some(PieceKind::I); 10];
    snap.active = None;
    let fb = render(&GameView::new(), &snap, VP);
    let blocks = (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).map(|c| c.ch) == Some('█'))
        .count();
    // Only the hold/next previews draw blocks: three mini pieces, 8 glyphs each.
    assert_eq!(blocks, 3 * 8);
}

#[test]
fn active_and_ghost_are_drawn() {
    let mut snap = GameState::new(1).snapshot();
    snap.active = Some(ActiveSnapshot {
        kind: PieceKind::O,
        rotation: Rotation::North,
        x: 3,
        y: 20,
    });
    snap.ghost_y = Some(38);

    let view = GameView::new();
    let fb = render(&view, &snap, VP);

    let (ax, ay) = view.cell_origin(VP, 4, 20).unwrap();
    let active = fb.get(ax, ay).unwrap();
    assert_eq!(active.ch, '█');
    assert!(active.style.bold);

    let (gx, gy) = view.cell_origin(VP, 5, 39).unwrap();
    let ghost = fb.get(gx, gy).unwrap();
    assert_eq!(ghost.ch, '░');
    assert!(ghost.style.dim);

    let plain = render(&view.clone().with_ghost(false), &snap, VP);
    assert_ne!(plain.get(gx, gy).unwrap().ch, '░');
}

#[test]
fn side_panels_show_stats_and_preview() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 4321;
    snap.level = 3;
    snap.lines = 27;
    snap.hold = Some(PieceKind::T);

    let fb = render(&GameView::new(), &snap, VP);
    for needle in ["HOLD", "NEXT", "SCORE", "4321", "LEVEL", "LINES", "27"] {
        assert!(screen_contains(&fb, needle), "missing {}", needle);
    }
}

#[test]
fn overlays_dim_the_well() {
    let mut snap = GameState::new(1).snapshot();
    snap.paused = true;
    let view = GameView::new();
    let fb = render(&view, &snap, VP);
    assert!(screen_contains(&fb, "PAUSED"));
    let (x, y) = view.cell_origin(VP, 0, 39).unwrap();
    assert!(fb.get(x, y).unwrap().style.dim);

    snap.paused = false;
    snap.game_over = true;
    let fb = render(&view, &snap, VP);
    assert!(screen_contains(&fb, "GAME OVER"));
    assert!(!screen_contains(&fb, "PAUSED"));
}

#[test]
fn tiny_terminal_gets_a_notice() {
    let fb = render(&GameView::new(), &GameState::new(1).snapshot(), Viewport::new(30, 10));
    assert!(screen_contains(&fb, "terminal too small"));
}

#[test]
fn render_into_reuses_buffer() {
    let view = GameView::new();
    let snap = GameState::new(9).snapshot();
    let mut fb = FrameBuffer::new(120, 40);
    fb.put_str(0, 0, "stale", CellStyle::default());
    view.render_into(&snap, VP, &mut fb);
    assert_eq!(fb, render(&view, &snap, VP));
}
