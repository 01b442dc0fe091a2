use approx::assert_relative_eq;

use osxiv_core::geometry::{DestRect, Size};
use osxiv_core::view::{Flow, ViewCommand, ViewState, Viewer, ViewerEvent};

#[test]
fn test_initial_state() {
    let state = ViewState::default();
    assert_eq!(state.zoom, 1.0);
    assert_eq!(state.pan_x, 0.0);
    assert_eq!(state.pan_y, 0.0);
}

#[test]
fn test_zoom_in_and_out() {
    let mut state = ViewState::default();
    state.apply(ViewCommand::ZoomIn);
    assert_relative_eq!(state.zoom, 1.1);
    state.apply(ViewCommand::ZoomOut);
    state.apply(ViewCommand::ZoomOut);
    assert_relative_eq!(state.zoom, 0.9, epsilon = 1e-12);
}

#[test]
fn test_zoom_out_floor() {
    let mut state = ViewState::default();
    for _ in 0..100 {
        let before = state.zoom;
        state.apply(ViewCommand::ZoomOut);
        assert!(state.zoom >= 0.0);
        if before - 0.1 < 0.0 {
            assert_eq!(state.zoom, before);
        } else {
            assert_relative_eq!(state.zoom, before - 0.1);
        }
    }
    // Accumulated rounding leaves 0.1 + 1.4e-16 after nine steps, so the
    // tenth decrement still passes the check and lands just above zero.
    assert!(state.zoom > 0.0);
    assert!(state.zoom < 1e-12);
}

#[test]
fn test_zoom_out_skips_instead_of_clamping() {
    let mut state = ViewState {
        zoom: 0.05,
        ..ViewState::default()
    };
    state.apply(ViewCommand::ZoomOut);
    assert_eq!(state.zoom, 0.05);

    // Exactly one step left: the decrement goes through and lands on zero.
    let mut state = ViewState {
        zoom: 0.1,
        ..ViewState::default()
    };
    state.apply(ViewCommand::ZoomOut);
    assert_eq!(state.zoom, 0.0);
}

#[test]
fn test_pan_directions() {
    let mut state = ViewState::default();
    state.apply(ViewCommand::PanRight);
    assert_relative_eq!(state.pan_x, 0.1);
    state.apply(ViewCommand::PanLeft);
    state.apply(ViewCommand::PanLeft);
    assert_relative_eq!(state.pan_x, -0.1);
    state.apply(ViewCommand::PanDown);
    assert_relative_eq!(state.pan_y, 0.1);
    state.apply(ViewCommand::PanUp);
    state.apply(ViewCommand::PanUp);
    assert_relative_eq!(state.pan_y, -0.1);
    assert_eq!(state.zoom, 1.0);
}

#[test]
fn test_pan_step_halves_when_zoom_doubles() {
    let mut at_one = ViewState {
        zoom: 1.0,
        ..ViewState::default()
    };
    let mut at_two = ViewState {
        zoom: 2.0,
        ..ViewState::default()
    };
    at_one.apply(ViewCommand::PanRight);
    at_two.apply(ViewCommand::PanRight);
    assert_relative_eq!(at_two.pan_x, at_one.pan_x / 2.0);
}

#[test]
fn test_pan_on_screen_distance_is_zoom_independent() {
    let viewer = Viewer::new(Size::new(200, 100));
    let window = Size::new(400, 400);

    for zoom in [0.5, 1.0, 2.0, 3.5] {
        let before = ViewState {
            zoom,
            ..ViewState::default()
        };
        let mut after = before;
        after.apply(ViewCommand::PanRight);

        let p0 = osxiv_core::geometry::Placement::compute(&before, viewer.source_size(), window);
        let p1 = osxiv_core::geometry::Placement::compute(&after, viewer.source_size(), window);
        // 10% of the fitted width at zoom 1.0.
        assert_relative_eq!(p0.x - p1.x, 40.0, epsilon = 1e-9);
    }
}

#[test]
fn test_viewer_redraws_on_commands_and_resize() {
    let mut viewer = Viewer::new(Size::new(200, 100));
    assert_eq!(
        viewer.handle(ViewerEvent::Command(ViewCommand::ZoomOut)),
        Flow::Redraw
    );
    assert_eq!(
        viewer.handle(ViewerEvent::Resized(Size::new(800, 600))),
        Flow::Redraw
    );
    assert_relative_eq!(viewer.state().zoom, 0.9);
}

#[test]
fn test_resize_keeps_state() {
    let mut viewer = Viewer::new(Size::new(200, 100));
    viewer.handle(ViewerEvent::Command(ViewCommand::PanDown));
    let before = *viewer.state();
    viewer.handle(ViewerEvent::Resized(Size::new(10, 10)));
    assert_eq!(*viewer.state(), before);
}

#[test]
fn test_quit_from_any_state() {
    let mut viewer = Viewer::new(Size::new(200, 100));
    assert_eq!(viewer.handle(ViewerEvent::Quit), Flow::Quit);

    for command in [
        ViewCommand::ZoomIn,
        ViewCommand::PanLeft,
        ViewCommand::ZoomOut,
        ViewCommand::PanUp,
    ] {
        viewer.handle(ViewerEvent::Command(command));
        assert_eq!(viewer.handle(ViewerEvent::Quit), Flow::Quit);
    }
}

#[test]
fn test_viewer_placement_follows_zoom() {
    let mut viewer = Viewer::new(Size::new(200, 100));
    let window = Size::new(400, 400);
    assert_eq!(
        viewer.placement(window).to_dest_rect(),
        DestRect { x: 0, y: 100, w: 400, h: 200 }
    );

    for _ in 0..5 {
        viewer.handle(ViewerEvent::Command(ViewCommand::ZoomOut));
    }
    assert_relative_eq!(viewer.state().zoom, 0.5, epsilon = 1e-12);
    let p = viewer.placement(window);
    assert_relative_eq!(p.width, 200.0, epsilon = 1e-9);
    assert_relative_eq!(p.height, 100.0, epsilon = 1e-9);
    assert_relative_eq!(p.x, 100.0, epsilon = 1e-9);
    assert_relative_eq!(p.y, 150.0, epsilon = 1e-9);
}
