use blockfall::core::GameState;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // Two columns per cell: 10*2 by 20 board pixels, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.apply_action(GameAction::Hold);
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.lines = 12;

    let text = screen_text(&GameView::default().render(&snap, Viewport::new(60, 22)));

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LINES"));
    assert!(text.contains("NEXT"));
    assert!(text.contains("HOLD"));
}

#[test]
fn term_view_skips_side_panel_in_narrow_viewport() {
    let snap = GameState::new(1).snapshot();
    let text = screen_text(&GameView::default().render(&snap, Viewport::new(22, 22)));
    assert!(!text.contains("SCORE"));
}
