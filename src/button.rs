//! Logical button codes.
//!
//! Codes `0..32` name the digital buttons by position in
//! [`ControllerState::buttons`](crate::state::ControllerState::buttons). Codes
//! [`LEFT_TRIGGER_CODE`] and [`RIGHT_TRIGGER_CODE`] address the analog triggers
//! as if they were buttons.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::MAX_BUTTONS;

pub const LEFT_TRIGGER_CODE: usize = MAX_BUTTONS;
pub const RIGHT_TRIGGER_CODE: usize = MAX_BUTTONS + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Digital button by zero-based index (`0..32`).
    Digital(u8),
    LeftTrigger,
    RightTrigger,
}

impl Button {
    /// `0..32` for digital buttons plus the two trigger codes.
    pub fn is_valid_code(code: usize) -> bool {
        code <= RIGHT_TRIGGER_CODE
    }

    /// Button for `code`, or `None` when out of range.
    pub fn from_code(code: usize) -> Option<Self> {
        match code {
            LEFT_TRIGGER_CODE => Some(Button::LeftTrigger),
            RIGHT_TRIGGER_CODE => Some(Button::RightTrigger),
            i if i < MAX_BUTTONS => Some(Button::Digital(i as u8)),
            _ => None,
        }
    }

    /// Inverse of [`from_code`](Self::from_code). Digital codes index the button
    /// array; `None` for a digital index past the last button.
    pub fn code(&self) -> Option<usize> {
        match *self {
            Button::Digital(i) if (i as usize) < MAX_BUTTONS => Some(i as usize),
            Button::Digital(_) => None,
            Button::LeftTrigger => Some(LEFT_TRIGGER_CODE),
            Button::RightTrigger => Some(RIGHT_TRIGGER_CODE),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // 1-based, like the labels printed on most pads
            Button::Digital(i) => write!(f, "BUTTON{}", *i as u32 + 1),
            Button::LeftTrigger => f.write_str("LEFT_TRIGGER"),
            Button::RightTrigger => f.write_str("RIGHT_TRIGGER"),
        }
    }
}
