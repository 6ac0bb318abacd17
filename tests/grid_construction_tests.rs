use stackgrid::api::{GridConfig, StackGrid};
use stackgrid::core::{Axis, FigureSize, Orientation, Side, StackPosition, SubplotParams};
use stackgrid::error::GridError;
use stackgrid::render::NullRenderer;

fn grid(config: GridConfig) -> StackGrid<NullRenderer> {
    StackGrid::new(NullRenderer::default(), config).expect("grid init")
}

#[test]
fn four_row_stack_alternates_sides_from_the_left() {
    let grid = grid(
        GridConfig::new(vec![2.0, 3.0, 1.0, 2.0], Orientation::MainHorizontal)
            .with_start_side(Side::Left)
            .with_alternate_sides(true),
    );

    assert_eq!(grid.stack_dim(), 4);
    assert_eq!(grid.main_axis_dim(), 1);
    assert_eq!(grid.twin_dim(), 0);
    assert_eq!(
        grid.data_sides(),
        &[Side::Left, Side::Right, Side::Left, Side::Right]
    );
    assert_eq!(
        grid.stack_positions(),
        &[
            StackPosition::EdgeA,
            StackPosition::Interior,
            StackPosition::Interior,
            StackPosition::EdgeB,
        ]
    );
    assert!(!grid.is_clean());
    grid.check_invariants().expect("fresh grid is consistent");
}

#[test]
fn panel_matrix_has_one_row_per_stack_index() {
    let grid = grid(
        GridConfig::new(vec![1.0, 2.0, 1.0], Orientation::MainHorizontal)
            .with_main_axis_ratios(vec![2.0, 1.0, 1.0, 3.0]),
    );

    assert_eq!(grid.total_stack_dim(), 3);
    assert_eq!(grid.panels().count(), 12);
    for stack_index in 0..3 {
        let row = grid.row(stack_index).expect("row exists");
        assert_eq!(row.len(), 4);
        for (main_index, id) in row.iter().enumerate() {
            let panel = grid.panel(*id).expect("panel exists");
            assert_eq!(panel.stack_index(), stack_index);
            assert_eq!(panel.main_index(), main_index);
            assert!(!panel.is_twin());
        }
    }
    assert!(grid.row(3).is_err());
}

#[test]
fn taller_ratio_gives_taller_panel_and_rows_run_top_down() {
    let grid = grid(
        GridConfig::new(vec![1.0, 3.0], Orientation::MainHorizontal).with_subplot(SubplotParams {
            hspace: 0.0,
            ..SubplotParams::default()
        }),
    );
    let top = grid.panel(grid.row(0).expect("row")[0]).expect("panel").bounds();
    let bottom = grid.panel(grid.row(1).expect("row")[0]).expect("panel").bounds();

    assert!((top.y0 - bottom.y1()).abs() <= 1e-12);
    assert!((bottom.height / top.height - 3.0).abs() <= 1e-9);
    assert!((top.width - bottom.width).abs() <= 1e-12);
}

#[test]
fn main_scale_is_shared_down_the_stack() {
    let mut grid = grid(
        GridConfig::new(vec![1.0, 1.0, 1.0], Orientation::MainHorizontal)
            .with_main_axis_ratios(vec![1.0, 1.0]),
    );
    let top_left = grid.get_panel(0, 0, None).expect("panel");
    let bottom_left = grid.get_panel(2, 0, None).expect("panel");
    let top_right = grid.get_panel(0, 1, None).expect("panel");

    grid.set_panel_limits(top_left, Axis::X, 0.0, 50.0, false)
        .expect("set limits");
    assert_eq!(grid.limits(bottom_left, Axis::X).expect("limits"), (0.0, 50.0));
    assert_eq!(grid.limits(top_right, Axis::X).expect("limits"), (0.0, 1.0));

    grid.set_panel_limits(top_left, Axis::Y, -5.0, 5.0, false)
        .expect("set limits");
    assert_eq!(grid.limits(top_right, Axis::Y).expect("limits"), (-5.0, 5.0));
    assert_eq!(grid.limits(bottom_left, Axis::Y).expect("limits"), (0.0, 1.0));
}

#[test]
fn vertical_main_axis_defaults_to_top_start() {
    let grid = grid(GridConfig::new(vec![1.0, 1.0, 1.0], Orientation::MainVertical));
    assert_eq!(grid.data_sides(), &[Side::Top, Side::Bottom, Side::Top]);

    let left = grid.panel(grid.row(0).expect("row")[0]).expect("panel").bounds();
    let right = grid.panel(grid.row(2).expect("row")[0]).expect("panel").bounds();
    assert!(left.x1() < right.x0);
    assert!((left.y0 - right.y0).abs() <= 1e-12);
}

#[test]
fn singleton_stack_position_follows_flag() {
    let single = grid(GridConfig::new(1.0, Orientation::MainHorizontal));
    assert_eq!(single.stack_positions(), &[StackPosition::EdgeA]);

    let both = grid(
        GridConfig::new(1.0, Orientation::MainHorizontal).with_singleton_both_spines(true),
    );
    assert_eq!(both.stack_positions(), &[StackPosition::Both]);
}

#[test]
fn invalid_inputs_fail_fast() {
    let empty = StackGrid::new(
        NullRenderer::default(),
        GridConfig::new(Vec::<f64>::new(), Orientation::MainHorizontal),
    );
    assert!(matches!(empty, Err(GridError::InvalidRatio { .. })));

    let negative = StackGrid::new(
        NullRenderer::default(),
        GridConfig::new(vec![1.0, -2.0], Orientation::MainHorizontal),
    );
    assert!(matches!(negative, Err(GridError::InvalidRatio { .. })));

    let bad_side = StackGrid::new(
        NullRenderer::default(),
        GridConfig::new(vec![1.0, 2.0], Orientation::MainVertical).with_start_side(Side::Left),
    );
    assert!(matches!(bad_side, Err(GridError::UnknownSide(_))));

    let bad_size = StackGrid::new(
        NullRenderer::default(),
        GridConfig::new(1.0, Orientation::MainHorizontal)
            .with_figure_size(FigureSize::new(0.0, 4.0)),
    );
    assert!(matches!(bad_size, Err(GridError::InvalidFigureSize { .. })));
}

#[test]
fn string_keys_parse_into_sides_and_orientations() {
    let side: Side = "right".parse().expect("side");
    assert_eq!(side, Side::Right);
    assert!(matches!("middle".parse::<Side>(), Err(GridError::UnknownSide(_))));

    let orientation: Orientation = "main-vertical".parse().expect("orientation");
    assert_eq!(orientation, Orientation::MainVertical);
    assert!(matches!(
        "diagonal".parse::<Orientation>(),
        Err(GridError::UnknownOrientation(_))
    ));
}

#[test]
fn data_sides_and_positions_can_be_reassigned() {
    let mut grid = grid(GridConfig::new(vec![1.0, 1.0, 1.0], Orientation::MainHorizontal));
    grid.reassign_data_sides(Side::Right, false).expect("reassign");
    assert_eq!(grid.data_sides(), &[Side::Right; 3]);

    let err = grid.set_data_sides(&[Side::Left]).expect_err("wrong length");
    assert!(matches!(
        err,
        GridError::ShapeMismatch {
            expected: 3,
            actual: 1,
            ..
        }
    ));
    assert!(grid.set_data_sides(&[Side::Left, Side::Top, Side::Left]).is_err());

    grid.set_stack_positions(&[StackPosition::Both; 3])
        .expect("explicit positions");
    assert_eq!(grid.stack_positions(), &[StackPosition::Both; 3]);
    grid.reassign_stack_positions(false).expect("reassign positions");
    assert_eq!(grid.stack_positions()[1], StackPosition::Interior);
    grid.check_invariants().expect("consistent");
}
