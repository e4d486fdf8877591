//! Property-based invariant tests for the reflow engine and the controller.
//!
//! These tests verify properties that must hold for any input:
//!
//! 1. Every output widget fits the grid (`w >= 1`, `h >= 2`, `x + w <= cols`).
//! 2. No two output widgets overlap.
//! 3. Resolving an output again without a patch returns it unchanged.
//! 4. No output widget can move up one row without overlapping another.
//! 5. The output has exactly the input's ids.
//! 6. The moved widget keeps the patched position when it fits the grid.
//! 7. Any sequence of events keeps the displayed layout valid.

use dashboard_grid::interaction::{ContainerBounds, Handle, Point};
use dashboard_grid::layout::geometry::{first_overlap, is_within_bounds};
use dashboard_grid::layout::{overlaps, Breakpoints, WidgetKind};
use dashboard_grid::{
    resolve_layout, Dashboard, DashboardEvent, Effect, GeometryPatch, GridConfig, Widget,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn cols_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(1u32), Just(2), Just(6), Just(12), 1u32..=16]
}

fn layout_strategy(max_len: usize) -> impl Strategy<Value = Vec<Widget>> {
    proptest::collection::vec((0u32..16, 0u32..14, 0u32..15, 0u32..7), 0..=max_len).prop_map(
        |geoms| {
            geoms
                .into_iter()
                .enumerate()
                .map(|(i, (x, y, w, h))| {
                    let id = format!("w{}", i);
                    Widget::new(&id, WidgetKind::Chart, &id, x, y, w, h)
                })
                .collect()
        },
    )
}

fn patch_strategy(len: usize) -> impl Strategy<Value = Option<GeometryPatch>> {
    if len == 0 {
        return Just(None).boxed();
    }
    proptest::option::of(
        (0..len, 0u32..16, 0u32..14, 1u32..9, 1u32..7).prop_map(|(i, x, y, w, h)| {
            GeometryPatch::new(format!("w{}", i)).x(x).y(y).w(w).h(h)
        }),
    )
    .boxed()
}

fn layout_and_patch() -> impl Strategy<Value = (Vec<Widget>, Option<GeometryPatch>, u32)> {
    (layout_strategy(10), cols_strategy()).prop_flat_map(|(layout, cols)| {
        let len = layout.len();
        (Just(layout), patch_strategy(len), Just(cols))
    })
}

fn sorted_ids(widgets: &[Widget]) -> Vec<String> {
    let mut ids: Vec<String> = widgets.iter().map(|w| w.id.clone()).collect();
    ids.sort();
    ids
}

// ═════════════════════════════════════════════════════════════════════════
// 1-5. Engine output properties
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn output_fits_grid((layout, patch, cols) in layout_and_patch()) {
        let out = resolve_layout(patch.as_ref(), &layout, cols).expect("should resolve");
        for w in &out {
            prop_assert!(w.w >= 1 && w.h >= 2, "undersized widget {:?}", w);
            prop_assert!(is_within_bounds(w, cols), "{:?} outside {} cols", w, cols);
        }
    }

    #[test]
    fn output_has_no_overlap((layout, patch, cols) in layout_and_patch()) {
        let out = resolve_layout(patch.as_ref(), &layout, cols).expect("should resolve");
        prop_assert_eq!(first_overlap(&out), None, "overlap in {:?}", out);
    }

    #[test]
    fn output_is_a_fixed_point((layout, patch, cols) in layout_and_patch()) {
        let out = resolve_layout(patch.as_ref(), &layout, cols).expect("should resolve");
        let again = resolve_layout(None, &out, cols).expect("should resolve");
        prop_assert_eq!(again, out);
    }

    #[test]
    fn no_widget_can_float((layout, patch, cols) in layout_and_patch()) {
        let out = resolve_layout(patch.as_ref(), &layout, cols).expect("should resolve");
        for (i, w) in out.iter().enumerate().filter(|(_, w)| w.y > 0) {
            let mut lifted = w.clone();
            lifted.y -= 1;
            let blocked = out
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && overlaps(&lifted, other));
            prop_assert!(blocked, "{} could rise from row {}", w.id, w.y);
        }
    }

    #[test]
    fn ids_are_preserved((layout, patch, cols) in layout_and_patch()) {
        let out = resolve_layout(patch.as_ref(), &layout, cols).expect("should resolve");
        prop_assert_eq!(sorted_ids(&out), sorted_ids(&layout));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. The mover keeps its column
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mover_keeps_clamped_column(
        layout in layout_strategy(8).prop_filter("non-empty", |l| !l.is_empty()),
        x in 0u32..12,
        w in 1u32..=12,
    ) {
        let patch = GeometryPatch::new("w0").x(x).w(w);
        let out = resolve_layout(Some(&patch), &layout, 12).expect("should resolve");
        let moved = out.iter().find(|m| m.id == "w0").expect("mover present");
        prop_assert_eq!(moved.w, w);
        prop_assert_eq!(moved.x, x.min(12 - w));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Random event sequences through the controller
// ═════════════════════════════════════════════════════════════════════════

const CONTAINER: ContainerBounds = ContainerBounds::new(0.0, 0.0, 1200.0);

fn event_strategy(len: usize) -> impl Strategy<Value = DashboardEvent> {
    let id = (0..len.max(1)).prop_map(|i| format!("w{}", i));
    let handle = prop_oneof![
        Just(Handle::Drag),
        Just(Handle::ResizeLeft),
        Just(Handle::ResizeRight)
    ];
    let point = (-200.0f64..1600.0, -200.0f64..1600.0).prop_map(|(x, y)| Point::new(x, y));
    prop_oneof![
        1 => (id.clone(), handle, point.clone()).prop_map(|(widget_id, handle, pointer)| {
            DashboardEvent::PointerDown {
                widget_id,
                handle,
                pointer,
            }
        }),
        4 => point.prop_map(|pointer| DashboardEvent::PointerMove {
            pointer,
            container: CONTAINER,
        }),
        1 => Just(DashboardEvent::PointerUp),
        1 => prop_oneof![Just(320.0), Just(800.0), Just(1400.0)]
            .prop_map(|width| DashboardEvent::ViewportResized { width }),
        1 => Just(DashboardEvent::ToggleGrid),
        1 => id.prop_map(|id| DashboardEvent::RemoveWidget { id }),
    ]
}

fn session_strategy() -> impl Strategy<Value = (Vec<Widget>, Vec<DashboardEvent>)> {
    layout_strategy(6).prop_flat_map(|layout| {
        let len = layout.len();
        (
            Just(layout),
            proptest::collection::vec(event_strategy(len), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn gestures_keep_layout_valid((layout, events) in session_strategy()) {
        let mut dashboard =
            Dashboard::new(layout, GridConfig::new(12, 96), Breakpoints::default());
        dashboard.normalize().expect("should normalize");

        for event in events {
            let effect = dashboard.handle(event.clone()).expect("should handle");
            let cols = dashboard.cols();
            for w in dashboard.widgets() {
                prop_assert!(is_within_bounds(w, cols), "{:?} outside {} cols after {:?}", w, cols, event);
            }
            prop_assert_eq!(first_overlap(dashboard.widgets()), None, "overlap after {:?}", event);
            if let Effect::Committed { .. } = effect {
                prop_assert!(!dashboard.interaction().is_active());
                prop_assert_eq!(dashboard.committed(), dashboard.widgets());
            }
        }
    }
}
