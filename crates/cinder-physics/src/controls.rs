//! Logical player controls, already mapped from raw input by the UI layer.

use serde::{Deserialize, Serialize};

/// A logical button the player can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Walk toward the look direction.
    Forward,
    /// Walk away from the look direction.
    Back,
    /// Strafe left.
    Left,
    /// Strafe right.
    Right,
    /// Jump when on the ground.
    Jump,
    /// Sneak.
    Crouch,
    /// Drop the held item.
    DiscardItem,
    /// Primary action (dig).
    Action1,
    /// Secondary action (place/use).
    Action2,
}

impl Control {
    /// Number of controls.
    pub const COUNT: usize = 9;

    /// Every control, in declaration order.
    pub const ALL: [Control; Self::COUNT] = [
        Control::Forward,
        Control::Back,
        Control::Left,
        Control::Right,
        Control::Jump,
        Control::Crouch,
        Control::DiscardItem,
        Control::Action1,
        Control::Action2,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Held/released flag for every [`Control`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    activated: [bool; Control::COUNT],
}

impl ControlState {
    /// All controls released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one control's flag.
    pub fn set(&mut self, control: Control, activated: bool) {
        self.activated[control.index()] = activated;
    }

    /// Returns `true` if the control is held.
    pub fn is_activated(&self, control: Control) -> bool {
        self.activated[control.index()]
    }

    /// Releases every control.
    pub fn release_all(&mut self) {
        self.activated = [false; Control::COUNT];
    }

    /// `+1` if only `positive` is held, `-1` if only `negative`, else `0`.
    pub fn axis(&self, positive: Control, negative: Control) -> i8 {
        i8::from(self.is_activated(positive)) - i8::from(self.is_activated(negative))
    }
}
