use egui::Key;
use osxiv_core::view::{ViewCommand, ViewerEvent};

/// Map a pressed key to a viewer event. Unbound keys yield `None`.
pub fn event_for_key(key: Key) -> Option<ViewerEvent> {
    let command = match key {
        // `=` shares the physical key with `+` on most layouts.
        Key::Plus | Key::Equals => ViewCommand::ZoomIn,
        Key::Minus => ViewCommand::ZoomOut,
        Key::ArrowUp => ViewCommand::PanUp,
        Key::ArrowDown => ViewCommand::PanDown,
        Key::ArrowLeft => ViewCommand::PanLeft,
        Key::ArrowRight => ViewCommand::PanRight,
        Key::Q => return Some(ViewerEvent::Quit),
        _ => return None,
    };
    Some(ViewerEvent::Command(command))
}

/// Translate this frame's raw input into viewer events, in arrival order.
///
/// Auto-repeated presses count as presses. Chords with the command modifier
/// are left to egui, which uses Ctrl/Cmd +/- for its own UI scaling.
pub fn collect_events(input: &egui::InputState) -> Vec<ViewerEvent> {
    let mut events: Vec<ViewerEvent> = input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } if !modifiers.command => event_for_key(*key),
            _ => None,
        })
        .collect();

    if input.viewport().close_requested() {
        events.push(ViewerEvent::Quit);
    }
    events
}
