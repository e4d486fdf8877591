//! Drag and corner resizes driven through pixel events.

use super::*;
use crate::layout::resolve_layout;

#[test]
fn test_drag_past_right_edge() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w1", Handle::Drag)).expect("down");

    let effect = dash.handle(move_to(10, 0)).expect("move");
    assert_eq!(
        effect,
        Effect::Resolved {
            widget_id: "w1".to_string(),
            placeholder: GridRect::new(4, 0, 8, 4),
        }
    );
    assert_eq!(rect_of(dash.widgets(), "w1"), GridRect::new(4, 0, 8, 4));
    assert_eq!(rect_of(dash.widgets(), "w2"), GridRect::new(8, 4, 4, 4));
    // Nothing is committed until the pointer is released.
    assert_eq!(dash.committed(), two_up().as_slice());
}

#[test]
fn test_pointer_up_commits_preview() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w1", Handle::Drag)).expect("down");
    dash.handle(move_to(10, 0)).expect("move");
    let preview = dash.widgets().to_vec();

    let effect = dash.handle(DashboardEvent::PointerUp).expect("up");
    assert_eq!(
        effect,
        Effect::Committed {
            widget_id: "w1".to_string()
        }
    );
    assert_eq!(dash.committed(), preview.as_slice());
    assert_eq!(dash.widgets(), preview.as_slice());
    assert_eq!(dash.placeholder(), None);
    assert_eq!(dash.active_widget_id(), None);
}

#[test]
fn test_resize_right_to_far_corner() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w1", Handle::ResizeRight)).expect("down");
    dash.handle(move_to(15, 5)).expect("move");

    assert_eq!(dash.placeholder(), Some(GridRect::new(0, 0, 12, 6)));
    assert_eq!(rect_of(dash.widgets(), "w1"), GridRect::new(0, 0, 12, 6));
    assert_eq!(rect_of(dash.widgets(), "w2"), GridRect::new(8, 6, 4, 4));
}

#[test]
fn test_resize_left_keeps_right_edge() {
    let layout = vec![widget("w1", 4, 0, 8, 4), widget("w2", 0, 0, 4, 2)];
    let mut dash = dashboard(layout);
    dash.handle(down("w1", Handle::ResizeLeft)).expect("down");
    dash.handle(move_to(2, 3)).expect("move");

    assert_eq!(dash.placeholder(), Some(GridRect::new(2, 0, 10, 4)));
    assert_eq!(rect_of(dash.widgets(), "w2"), GridRect::new(0, 4, 4, 2));
}

#[test]
fn test_gesture_is_resolved_against_committed_baseline() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w1", Handle::Drag)).expect("down");
    dash.handle(move_to(10, 0)).expect("move away");
    dash.handle(move_to(0, 0)).expect("move back");

    // Moving back undoes the push instead of stacking on the preview.
    assert_eq!(dash.widgets(), two_up().as_slice());
}

#[test]
fn test_placeholder_snaps_to_resolved_position() {
    let layout = vec![
        widget("w1", 0, 0, 12, 2),
        widget("w2", 0, 2, 6, 3),
        widget("w3", 6, 2, 6, 3),
    ];
    let mut dash = dashboard(layout.clone());
    dash.handle(down("w1", Handle::Drag)).expect("down");
    dash.handle(move_to(0, 3)).expect("move");

    // Gravity lifts w1 back to the top, and the ghost follows it.
    assert_eq!(dash.placeholder(), Some(GridRect::new(0, 0, 12, 2)));
    assert_eq!(dash.widgets(), layout.as_slice());

    // The same candidate again is jitter even though the ghost differs.
    let again = DashboardEvent::PointerMove {
        pointer: Point::new(20.0, 300.0),
        container: CONTAINER,
    };
    assert_eq!(
        dash.handle(again).expect("move"),
        noop(NoopReason::SubCellJitter)
    );
}

#[test]
fn test_pointer_outside_container_is_clamped() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w2", Handle::Drag)).expect("down");
    let event = DashboardEvent::PointerMove {
        pointer: Point::new(-500.0, -500.0),
        container: CONTAINER,
    };
    dash.handle(event).expect("move");

    assert_eq!(dash.placeholder(), Some(GridRect::new(0, 0, 4, 4)));
    assert_eq!(rect_of(dash.widgets(), "w1"), GridRect::new(0, 4, 8, 4));
}

#[test]
fn test_offset_container_is_respected() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w1", Handle::ResizeRight)).expect("down");
    let event = DashboardEvent::PointerMove {
        // Column 9 and row 4 of a container starting at (300, 200).
        pointer: Point::new(300.0 + 950.0, 200.0 + 4.5 * 96.0),
        container: ContainerBounds::new(300.0, 200.0, 1200.0),
    };
    dash.handle(event).expect("move");
    assert_eq!(dash.placeholder(), Some(GridRect::new(0, 0, 10, 5)));
}

#[test]
fn test_every_preview_matches_engine() {
    let mut dash = dashboard(two_up());
    dash.handle(down("w2", Handle::ResizeLeft)).expect("down");
    dash.handle(move_to(1, 6)).expect("move");

    let expected = resolve_layout(
        Some(&crate::layout::GeometryPatch::from_rect(
            "w2",
            GridRect::new(1, 0, 11, 7),
        )),
        &two_up(),
        12,
    )
    .expect("should resolve");
    assert_eq!(dash.widgets(), expected.as_slice());
}
