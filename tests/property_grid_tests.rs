use approx::{abs_diff_eq, relative_eq};
use proptest::prelude::*;
use stackgrid::api::{GridConfig, StackGrid, assign_sides, to_absolute};
use stackgrid::core::{Orientation, Side, StackPosition, SubplotParams};
use stackgrid::render::NullRenderer;

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::MainHorizontal),
        Just(Orientation::MainVertical)
    ]
}

fn build(
    stack: Vec<f64>,
    main: Vec<f64>,
    orientation: Orientation,
) -> StackGrid<NullRenderer> {
    StackGrid::new(
        NullRenderer::default(),
        GridConfig::new(stack, orientation).with_main_axis_ratios(main),
    )
    .expect("grid init")
}

proptest! {
    #[test]
    fn construction_produces_full_matrix(
        stack in prop::collection::vec(0.1f64..10.0, 1..6),
        main in prop::collection::vec(0.1f64..10.0, 1..5),
        orientation in orientation_strategy()
    ) {
        let grid = StackGrid::new(
            NullRenderer::default(),
            GridConfig::new(stack.clone(), orientation)
                .with_main_axis_ratios(main.clone())
                .with_subplot(SubplotParams {
                    wspace: 0.0,
                    hspace: 0.0,
                    ..SubplotParams::default()
                }),
        )
        .expect("grid init");
        prop_assert_eq!(grid.stack_dim(), stack.len());
        prop_assert_eq!(grid.main_axis_dim(), main.len());
        prop_assert_eq!(grid.panels().count(), stack.len() * main.len());
        prop_assert!(grid.check_invariants().is_ok());

        // Panel extent along the stack follows its ratio.
        let first = grid.panel(grid.row(0).expect("row")[0]).expect("panel").bounds();
        for (index, ratio) in stack.iter().enumerate().skip(1) {
            let bounds = grid.panel(grid.row(index).expect("row")[0]).expect("panel").bounds();
            let (own, reference) = match orientation {
                Orientation::MainHorizontal => (bounds.height, first.height),
                Orientation::MainVertical => (bounds.width, first.width),
            };
            prop_assert!(own > 0.0);
            prop_assert!(relative_eq!(own / reference, ratio / stack[0], max_relative = 1e-9));
        }
    }

    #[test]
    fn cleanup_leaves_one_stacked_spine_per_row(
        stack in prop::collection::vec(0.5f64..4.0, 1..6),
        main in prop::collection::vec(0.5f64..4.0, 1..4),
        orientation in orientation_strategy(),
        twin_hosts in prop::collection::vec(0usize..6, 0..4)
    ) {
        let mut grid = build(stack.clone(), main, orientation);
        let hosts = twin_hosts
            .into_iter()
            .filter(|host| *host < stack.len())
            .collect::<Vec<_>>();
        grid.make_twins(&hosts).expect("twins");
        grid.cleanup().expect("cleanup");

        let stack_sides = orientation.stack_sides();
        for row_index in 0..grid.total_stack_dim() {
            let visible = grid
                .row(row_index)
                .expect("row")
                .iter()
                .map(|id| grid.panel(*id).expect("panel"))
                .map(|panel| {
                    stack_sides
                        .iter()
                        .filter(|side| panel.spine(**side).visible)
                        .count()
                })
                .sum::<usize>();
            prop_assert_eq!(visible, 1);
        }

        let cleaned = grid.snapshot();
        grid.cleanup().expect("second cleanup");
        prop_assert_eq!(grid.snapshot(), cleaned);
    }

    #[test]
    fn twin_round_trip_restores_structure(
        stack in prop::collection::vec(0.5f64..4.0, 1..5),
        main in prop::collection::vec(0.5f64..4.0, 1..4),
        twin_hosts in prop::collection::vec(0usize..4, 1..5)
    ) {
        let mut grid = build(stack.clone(), main, Orientation::MainHorizontal);
        let hosts = twin_hosts
            .into_iter()
            .filter(|host| *host < stack.len())
            .collect::<Vec<_>>();
        let before = grid.snapshot();

        grid.make_twins(&hosts).expect("twins");
        prop_assert_eq!(grid.twin_dim(), hosts.len());
        for (offset, host) in hosts.iter().enumerate() {
            let side = grid.data_sides()[stack.len() + offset];
            prop_assert_eq!(side, Orientation::MainHorizontal.opposite(grid.data_sides()[*host]).expect("side"));
            prop_assert_eq!(grid.stack_positions()[stack.len() + offset], StackPosition::Interior);
        }

        grid.remove_twins();
        let after = grid.snapshot();
        prop_assert_eq!(after.data_sides, before.data_sides);
        prop_assert_eq!(after.stack_positions, before.stack_positions);
        prop_assert_eq!(after.scales, before.scales);
        prop_assert_eq!(after.panels, before.panels);
    }

    #[test]
    fn shifts_always_move_spines_outward(
        shifts in prop::collection::vec(0.0f64..1.0, 1..8),
        alternate in any::<bool>()
    ) {
        let sides = assign_sides(Orientation::MainHorizontal, Side::Left, alternate, shifts.len())
            .expect("sides");
        let positions = to_absolute(&shifts, &sides);
        for ((position, side), shift) in positions.iter().zip(&sides).zip(&shifts) {
            if side.is_low() {
                prop_assert!(*position <= 0.0);
                prop_assert!(abs_diff_eq!(-*position, *shift, epsilon = 1e-12));
            } else {
                prop_assert!(*position >= 1.0);
                prop_assert!(abs_diff_eq!(*position - 1.0, *shift, epsilon = 1e-12));
            }
        }
    }
}
