use tui_snake::core::{GameState, Snake};
use tui_snake::scores::ScoreEntry;
use tui_snake::term::{AnchorY, GameView, Hud, Viewport};
use tui_snake::types::{Cell, Direction};

fn small_state() -> GameState {
    GameState::with_layout(
        10,
        Snake::from_cells(&[Cell::new(3, 4), Cell::new(2, 4), Cell::new(1, 4)]).unwrap(),
        Some(Cell::new(7, 1)),
        Direction::Right,
        1,
    )
    .unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = small_state().snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    // 10 cells * 2 columns + border => 22x12.
    let fb = view.render(&snap, &Hud::default(), Viewport::new(22, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_snake_cell_as_two_chars_wide() {
    let snap = small_state().snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &Hud::default(), Viewport::new(22, 12));

    // Inside border: (1,1) origin, two columns per cell.
    let y = 1 + 4;
    for cell_x in 1..=3u16 {
        let x = 1 + cell_x * 2;
        assert_eq!(fb.get(x, y).unwrap().ch, '█');
        assert_eq!(fb.get(x + 1, y).unwrap().ch, '█');
    }
    assert_eq!(fb.get(1, y).unwrap().ch, '·');
}

#[test]
fn term_view_renders_food() {
    let snap = small_state().snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &Hud::default(), Viewport::new(22, 12));

    assert_eq!(fb.get(1 + 7 * 2, 1 + 1).unwrap().ch, '●');
}

#[test]
fn term_view_side_panel_lists_top_scores() {
    let snap = small_state().snapshot();
    let board: Vec<ScoreEntry> = (0..10)
        .map(|i| ScoreEntry::new(format!("p{}", i), 100 - i * 10))
        .collect();
    let hud = Hud {
        player: "ada",
        leaderboard: &board,
        status: None,
    };
    let fb = GameView::default().render(&snap, &hud, Viewport::new(80, 40));
    let text = fb.text();

    assert!(text.contains("ada"));
    assert!(text.contains("TOP SCORES"));
    assert!(text.contains("1. 100 p0"));
    assert!(text.contains("10. 10 p9"));
}

#[test]
fn term_view_status_message_is_optional() {
    let snap = small_state().snapshot();
    let with = Hud {
        player: "ada",
        leaderboard: &[],
        status: Some("Save failed"),
    };
    let without = Hud { status: None, ..with };

    let vp = Viewport::new(80, 30);
    assert!(GameView::default().render(&snap, &with, vp).text().contains("Save failed"));
    assert!(!GameView::default().render(&snap, &without, vp).text().contains("Save failed"));
}
