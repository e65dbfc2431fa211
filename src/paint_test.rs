use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn drawing() -> PaintController {
    let mut paint = PaintController::new();
    assert_eq!(paint.press(pt(0.0, 0.0), Button::Primary, false), Press::Drawing);
    paint
}

// =============================================================
// PaintOp
// =============================================================

#[test]
fn op_fills_by_default() {
    assert_eq!(PaintOp::sample(Modifiers::default(), false), PaintOp::Fill);
}

#[test]
fn op_erases_with_shift_or_toggle() {
    assert_eq!(PaintOp::sample(Modifiers::shift(), false), PaintOp::Erase);
    assert_eq!(PaintOp::sample(Modifiers::default(), true), PaintOp::Erase);
    assert_eq!(PaintOp::sample(Modifiers::shift(), true), PaintOp::Erase);
}

// =============================================================
// press / release
// =============================================================

#[test]
fn new_controller_is_idle_without_suppression() {
    let paint = PaintController::new();
    assert_eq!(paint.state(), InputState::Idle);
    assert!(!paint.suppression_pending());
}

#[test]
fn armed_controller_swallows_exactly_one_press() {
    let mut paint = PaintController::new();
    paint.arm();
    assert!(paint.suppression_pending());
    assert_eq!(paint.press(pt(1.0, 1.0), Button::Primary, false), Press::Suppressed);
    assert_eq!(paint.state(), InputState::Idle);
    assert!(!paint.suppression_pending());
    assert_eq!(paint.press(pt(1.0, 1.0), Button::Primary, false), Press::Drawing);
}

#[test]
fn suppression_applies_even_on_chrome() {
    let mut paint = PaintController::new();
    paint.arm();
    assert_eq!(paint.press(pt(1.0, 1.0), Button::Primary, true), Press::Suppressed);
    assert_eq!(paint.press(pt(1.0, 1.0), Button::Primary, true), Press::OnChrome);
}

#[test]
fn press_on_chrome_does_not_start_stroke() {
    let mut paint = PaintController::new();
    assert_eq!(paint.press(pt(1.0, 1.0), Button::Primary, true), Press::OnChrome);
    assert!(!paint.is_drawing());
}

#[test]
fn middle_and_secondary_start_panning() {
    let mut paint = PaintController::new();
    assert_eq!(paint.press(pt(3.0, 4.0), Button::Middle, false), Press::Panning);
    assert_eq!(paint.state(), InputState::Panning { last_screen: pt(3.0, 4.0) });
    paint.release(Button::Middle);
    assert_eq!(paint.press(pt(3.0, 4.0), Button::Secondary, false), Press::Panning);
}

#[test]
fn release_returns_to_idle() {
    let mut paint = drawing();
    assert!(paint.release(Button::Primary));
    assert_eq!(paint.state(), InputState::Idle);
    assert!(!paint.release(Button::Primary));
}

#[test]
fn releasing_another_button_keeps_the_gesture() {
    let mut paint = drawing();
    assert!(!paint.release(Button::Middle));
    assert!(paint.is_drawing());
    assert!(paint.release(Button::Primary));
}

#[test]
fn cancel_ends_any_gesture() {
    let mut paint = PaintController::new();
    paint.press(pt(3.0, 4.0), Button::Secondary, false);
    assert!(paint.cancel());
    assert_eq!(paint.state(), InputState::Idle);
    assert!(!paint.release(Button::Secondary));
}

// =============================================================
// stroke
// =============================================================

#[test]
fn stroke_while_idle_does_nothing() {
    let mut paint = PaintController::new();
    let mut grid = WorldGrid::new(10, 10);
    assert!(!paint.stroke(&mut grid, Block::new(1, 1), PaintOp::Fill));
    assert!(grid.is_empty());
}

#[test]
fn stroke_fills_and_erases() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    assert!(paint.stroke(&mut grid, Block::new(1, 1), PaintOp::Fill));
    assert!(grid.is_filled(1, 1));
    assert!(!paint.stroke(&mut grid, Block::new(1, 1), PaintOp::Fill));
    assert!(paint.stroke(&mut grid, Block::new(1, 1), PaintOp::Erase));
    assert!(!grid.is_filled(1, 1));
}

#[test]
fn stroke_remembers_last_in_bounds_block() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(2, 2), PaintOp::Fill);
    assert_eq!(paint.state(), InputState::Drawing { last_block: Some(Block::new(2, 2)) });
    paint.stroke(&mut grid, Block::new(-3, 2), PaintOp::Fill);
    assert_eq!(paint.state(), InputState::Drawing { last_block: None });
}

#[test]
fn fast_move_fills_the_gap() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(0, 0), PaintOp::Fill);
    paint.stroke(&mut grid, Block::new(5, 0), PaintOp::Fill);
    assert_eq!(grid.len(), 6);
}

#[test]
fn stroke_leaving_world_paints_up_to_edge() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(7, 3), PaintOp::Fill);
    paint.stroke(&mut grid, Block::new(12, 3), PaintOp::Fill);
    assert_eq!(grid.to_list(), vec![Block::new(7, 3), Block::new(8, 3), Block::new(9, 3)]);
}

#[test]
fn mode_change_leaves_previous_cell_alone() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(2, 0), PaintOp::Fill);
    assert!(!paint.stroke(&mut grid, Block::new(3, 0), PaintOp::Erase));
    assert_eq!(grid.to_list(), vec![Block::new(2, 0)]);
}

#[test]
fn mode_change_on_same_cell_applies() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(2, 0), PaintOp::Fill);
    assert!(paint.stroke(&mut grid, Block::new(2, 0), PaintOp::Erase));
    assert!(grid.is_empty());
}

#[test]
fn far_away_stroke_stops_at_world_edge() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(0, 5), PaintOp::Fill);
    paint.stroke(&mut grid, Block::new(i32::MAX, 5), PaintOp::Fill);
    assert_eq!(grid.len(), 10);
    paint.stroke(&mut grid, Block::new(4, 4), PaintOp::Fill);
    paint.stroke(&mut grid, Block::new(4, i32::MIN), PaintOp::Fill);
    assert!((0..=4).all(|y| grid.is_filled(4, y)));
}

#[test]
fn lift_breaks_gap_filling() {
    let mut paint = drawing();
    let mut grid = WorldGrid::new(10, 10);
    paint.stroke(&mut grid, Block::new(0, 0), PaintOp::Fill);
    paint.lift();
    paint.stroke(&mut grid, Block::new(5, 0), PaintOp::Fill);
    assert_eq!(grid.to_list(), vec![Block::new(0, 0), Block::new(5, 0)]);
}

// =============================================================
// drag
// =============================================================

#[test]
fn drag_returns_inverse_pointer_delta() {
    let mut paint = PaintController::new();
    paint.press(pt(100.0, 100.0), Button::Middle, false);
    assert_eq!(paint.drag(pt(90.0, 120.0)), Some((10.0, -20.0)));
    assert_eq!(paint.drag(pt(90.0, 120.0)), Some((0.0, 0.0)));
}

#[test]
fn drag_while_drawing_is_none() {
    let mut paint = drawing();
    assert_eq!(paint.drag(pt(5.0, 5.0)), None);
}

// =============================================================
// line_cells
// =============================================================

#[test]
fn line_single_cell() {
    assert_eq!(line_cells(Block::new(2, 2), Block::new(2, 2)).collect::<Vec<_>>(), vec![Block::new(2, 2)]);
}

#[test]
fn line_diagonal() {
    let cells: Vec<_> = line_cells(Block::new(0, 0), Block::new(3, 3)).collect();
    assert_eq!(cells, vec![Block::new(0, 0), Block::new(1, 1), Block::new(2, 2), Block::new(3, 3)]);
}

#[test]
fn line_is_connected_and_hits_both_ends() {
    let a = Block::new(4, 1);
    let b = Block::new(-2, 6);
    let cells: Vec<_> = line_cells(a, b).collect();
    assert_eq!(cells.first(), Some(&a));
    assert_eq!(cells.last(), Some(&b));
    for pair in cells.windows(2) {
        assert!((pair[0].x - pair[1].x).abs() <= 1);
        assert!((pair[0].y - pair[1].y).abs() <= 1);
    }
}

#[test]
fn line_between_extreme_cells_is_lazy() {
    let mut cells = line_cells(Block::new(i32::MIN, i32::MIN), Block::new(i32::MAX, i32::MAX));
    assert_eq!(cells.next(), Some(Block::new(i32::MIN, i32::MIN)));
    assert_eq!(cells.next(), Some(Block::new(i32::MIN + 1, i32::MIN + 1)));
}
