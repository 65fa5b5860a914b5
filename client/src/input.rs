use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    #[actionlike(DualAxis)]
    Move,
    #[actionlike(DualAxis)]
    Look,
    Sprint,
    Jump,
    Crouch,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let input_map = InputMap::default()
        .with_dual_axis(InputAction::Move, VirtualDPad::wasd())
        .with_dual_axis(InputAction::Look, MouseMove::default())
        .with(InputAction::Sprint, KeyCode::ShiftLeft)
        .with(InputAction::Jump, KeyCode::Space)
        .with(InputAction::Crouch, KeyCode::ControlLeft);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());
}
