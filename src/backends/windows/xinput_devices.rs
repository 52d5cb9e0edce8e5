#![cfg(target_os = "windows")]

//! Windows XInput FFI.
//!
//! Wraps `XInputGetState` / `XInputGetCapabilities` for
//! [`XInputBackend`](crate::backends::xinput::XInputBackend). Slots are `0..4`;
//! range checks happen in the backend before these are called.

use windows_sys::Win32::UI::Input::XboxController::{
    XInputGetCapabilities, XInputGetState, XINPUT_CAPABILITIES, XINPUT_FLAG_GAMEPAD, XINPUT_STATE,
};

use crate::backends::xinput::{RawGamepad, XInputApi, XInputResult};

/// `ERROR_SUCCESS`.
const ERROR_SUCCESS: XInputResult = 0;

/// The system XInput driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinXInputApi;

impl WinXInputApi {
    pub fn new() -> Self {
        WinXInputApi
    }
}

impl XInputApi for WinXInputApi {
    fn get_state(&self, user_index: u32) -> Result<RawGamepad, XInputResult> {
        // FFI struct: must be manually zeroed
        let mut state: XINPUT_STATE = unsafe { std::mem::zeroed() };

        let res = unsafe { XInputGetState(user_index, &mut state) };
        if res != ERROR_SUCCESS {
            // Disconnected or empty slot.
            return Err(res);
        }

        let gp = state.Gamepad;
        Ok(RawGamepad {
            buttons: gp.wButtons as u16,
            left_trigger: gp.bLeftTrigger,
            right_trigger: gp.bRightTrigger,
            thumb_lx: gp.sThumbLX,
            thumb_ly: gp.sThumbLY,
            thumb_rx: gp.sThumbRX,
            thumb_ry: gp.sThumbRY,
        })
    }

    fn get_capabilities(&self, user_index: u32) -> Result<(), XInputResult> {
        let mut caps: XINPUT_CAPABILITIES = unsafe { std::mem::zeroed() };

        let res = unsafe { XInputGetCapabilities(user_index, XINPUT_FLAG_GAMEPAD, &mut caps) };
        if res != ERROR_SUCCESS {
            return Err(res);
        }
        Ok(())
    }
}
