use approx::assert_abs_diff_eq;
use stackgrid::api::{GridConfig, ShiftInput, ShiftTarget, StackGrid};
use stackgrid::core::{Orientation, Side};
use stackgrid::error::GridError;
use stackgrid::render::NullRenderer;

fn grid(config: GridConfig) -> StackGrid<NullRenderer> {
    StackGrid::new(NullRenderer::default(), config).expect("grid init")
}

fn spine_position(grid: &StackGrid<NullRenderer>, row: usize, main: usize, side: Side) -> f64 {
    let id = grid.row(row).expect("row")[main];
    grid.panel(id).expect("panel").spine(side).position
}

#[test]
fn uniform_shift_moves_data_spines_outward() {
    let mut grid = grid(
        GridConfig::new(vec![1.0, 1.0, 1.0], Orientation::MainHorizontal)
            .with_main_axis_ratios(vec![1.0, 1.0]),
    );
    grid.set_relative_shift(0.1, ShiftTarget::Stack);

    // Stored but not applied yet.
    assert_eq!(spine_position(&grid, 0, 0, Side::Left), 0.0);
    grid.apply_spine_shift().expect("apply");

    for main in 0..2 {
        assert_abs_diff_eq!(spine_position(&grid, 0, main, Side::Left), -0.1);
        assert_abs_diff_eq!(spine_position(&grid, 1, main, Side::Right), 1.1);
        assert_abs_diff_eq!(spine_position(&grid, 2, main, Side::Left), -0.1);
        // Non-data stacked sides stay on the panel edge.
        assert_eq!(spine_position(&grid, 0, main, Side::Right), 1.0);
    }
}

#[test]
fn per_row_shift_and_wrong_length_fallback() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0, 1.0], Orientation::MainHorizontal));
    grid.shift_spines(vec![0.0, 0.2, 0.3], ShiftTarget::Stack)
        .expect("shift");
    assert_eq!(spine_position(&grid, 0, 0, Side::Left), 0.0);
    assert_abs_diff_eq!(spine_position(&grid, 1, 0, Side::Right), 1.2);
    assert_abs_diff_eq!(spine_position(&grid, 2, 0, Side::Left), -0.3);

    grid.set_relative_shift(vec![0.5, 0.9], ShiftTarget::Stack);
    assert_eq!(grid.relative_shifts().0, Some(&[0.5, 0.5, 0.5][..]));

    // Empty lists keep the previous request.
    grid.set_relative_shift(ShiftInput::PerRow(Vec::new()), ShiftTarget::Stack);
    assert_eq!(grid.relative_shifts().0, Some(&[0.5, 0.5, 0.5][..]));
}

#[test]
fn twin_shift_is_ignored_without_twins() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0], Orientation::MainHorizontal));
    grid.set_relative_shift(0.3, ShiftTarget::Twin);
    assert_eq!(grid.relative_shifts(), (None, None));
}

#[test]
fn twin_rows_shift_independently() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0], Orientation::MainHorizontal));
    grid.make_twins(&[0]).expect("twin");
    grid.set_relative_shift(0.05, ShiftTarget::Stack);
    grid.set_relative_shift(0.25, ShiftTarget::Twin);
    grid.apply_spine_shift().expect("apply");

    assert_abs_diff_eq!(spine_position(&grid, 0, 0, Side::Left), -0.05);
    assert_abs_diff_eq!(spine_position(&grid, 2, 0, Side::Right), 1.25);

    grid.set_relative_shift(vec![0.1, 0.2, 0.3], ShiftTarget::All);
    assert_eq!(
        grid.relative_shifts(),
        (Some(&[0.1, 0.2][..]), Some(&[0.3][..]))
    );
}

#[test]
fn vertical_shift_uses_bottom_as_low_side() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0], Orientation::MainVertical));
    grid.shift_spines(0.15, ShiftTarget::Stack).expect("shift");
    assert_abs_diff_eq!(spine_position(&grid, 0, 0, Side::Top), 1.15);
    assert_abs_diff_eq!(spine_position(&grid, 1, 0, Side::Bottom), -0.15);
}

#[test]
fn reset_returns_spines_to_edges() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0], Orientation::MainHorizontal));
    grid.make_twins(&[1]).expect("twin");
    grid.shift_spines(0.2, ShiftTarget::All).expect("shift");
    let id = grid.get_panel(0, 0, None).expect("panel");
    grid.move_spine(id, Side::Right, 0.4).expect("move one spine");
    assert_abs_diff_eq!(spine_position(&grid, 0, 0, Side::Right), 1.4);

    grid.reset_spine_shift();
    assert_eq!(grid.relative_shifts(), (None, None));
    for panel in grid.panels() {
        assert_eq!(panel.spine(Side::Left).position, 0.0);
        assert_eq!(panel.spine(Side::Right).position, 1.0);
    }
}

#[test]
fn move_spine_rejects_main_axis_sides() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0], Orientation::MainHorizontal));
    let id = grid.get_panel(0, 0, None).expect("panel");
    let err = grid.move_spine(id, Side::Top, 0.1).expect_err("top is a main edge");
    assert!(matches!(err, GridError::UnknownSide(_)));
    assert!(grid.move_spine(id, Side::Left, f64::NAN).is_err());
}

#[test]
fn non_finite_shift_is_ignored() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0], Orientation::MainHorizontal));
    grid.set_relative_shift(f64::NAN, ShiftTarget::Stack);
    assert_eq!(grid.relative_shifts(), (None, None));
    grid.apply_spine_shift().expect("apply");
    assert_eq!(spine_position(&grid, 0, 0, Side::Left), 0.0);
    assert_eq!(spine_position(&grid, 1, 0, Side::Right), 1.0);
    grid.render().expect("render");

    grid.shift_spines(0.2, ShiftTarget::Stack).expect("shift");
    grid.shift_spines(vec![0.1, f64::INFINITY], ShiftTarget::All)
        .expect("shift");
    assert_eq!(grid.relative_shifts().0, Some(&[0.2, 0.2][..]));
    assert_abs_diff_eq!(spine_position(&grid, 0, 0, Side::Left), -0.2);
    assert_abs_diff_eq!(spine_position(&grid, 1, 0, Side::Right), 1.2);
    grid.render().expect("render after rejected list");
}
