//! Cursor capture for mouse look.
//!
//! The window grabs and hides the cursor at startup. Escape releases it (and
//! the player module reads [`CursorCaptured`] to gate movement); clicking the
//! window recaptures.

use bevy::{
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused},
};

/// Whether the cursor is currently grabbed for mouse look.
#[derive(Resource)]
pub struct CursorCaptured(pub bool);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(CursorCaptured(true));

    app.add_systems(Startup, capture_on_startup);

    // Re-apply on focus to avoid OS/browser resets
    app.add_systems(Update, (toggle_capture, reapply_on_focus));
}

fn capture_on_startup(mut cursor_options: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut cursor) = cursor_options.single_mut() {
        set_grab(&mut cursor, true);
        log::info!("cursor captured");
    }
}

fn toggle_capture(
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut captured: ResMut<CursorCaptured>,
    mut cursor_options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor) = cursor_options.single_mut() else {
        return;
    };

    if captured.0 && keys.just_pressed(KeyCode::Escape) {
        captured.0 = false;
        set_grab(&mut cursor, false);
    } else if !captured.0 && buttons.just_pressed(MouseButton::Left) {
        captured.0 = true;
        set_grab(&mut cursor, true);
    }
}

fn reapply_on_focus(
    mut messages: MessageReader<WindowFocused>,
    captured: Res<CursorCaptured>,
    mut cursor_options: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor) = cursor_options.single_mut() else {
        return;
    };
    for message in messages.read() {
        if message.focused && captured.0 {
            set_grab(&mut cursor, true);
        }
    }
}

fn set_grab(cursor: &mut CursorOptions, locked: bool) {
    cursor.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    cursor.visible = !locked;
}
