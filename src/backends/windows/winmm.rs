#![cfg(target_os = "windows")]

//! winmm joystick FFI.
//!
//! Thin wrapper that turns `joyGetDevCapsW` / `joyGetPosEx` into the plain
//! records consumed by [`LegacyBackend`](crate::backends::joystick::LegacyBackend).

use windows_sys::Win32::Media::Multimedia::{
    joyGetDevCapsW, joyGetNumDevs, joyGetPosEx, JOYCAPSW, JOYINFOEX,
};

use crate::backends::joystick::{JoystickApi, MmResult, RawJoyCaps, RawJoyInfo};

/// `JOYERR_NOERROR`.
const JOYERR_NOERROR: MmResult = 0;

/// `JOY_RETURNALL`: request every field of `JOYINFOEX`.
const JOY_RETURNALL: u32 = 0x0000_00ff;

/// `JOYSTICKID1`: winmm ids start here.
const JOYSTICKID1: u32 = 0;

/// The system winmm joystick driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct WinMmApi;

impl WinMmApi {
    pub fn new() -> Self {
        WinMmApi
    }
}

/// Decode a NUL-terminated UTF-16 buffer.
fn wide_to_string(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

impl JoystickApi for WinMmApi {
    fn num_devs(&self) -> u32 {
        unsafe { joyGetNumDevs() }
    }

    fn dev_caps(&self, id: u32) -> Result<RawJoyCaps, MmResult> {
        // FFI struct: must be manually zeroed
        let mut jc: JOYCAPSW = unsafe { std::mem::zeroed() };
        let res = unsafe {
            joyGetDevCapsW(
                (id + JOYSTICKID1) as usize,
                &mut jc,
                std::mem::size_of::<JOYCAPSW>() as u32,
            )
        };
        if res != JOYERR_NOERROR {
            return Err(res);
        }

        // copy out of the (packed) struct before borrowing
        let pname = jc.szPname;
        Ok(RawJoyCaps {
            name: wide_to_string(&pname),
            x_min: jc.wXmin,
            x_max: jc.wXmax,
            y_min: jc.wYmin,
            y_max: jc.wYmax,
            z_min: jc.wZmin,
            z_max: jc.wZmax,
            r_min: jc.wRmin,
            r_max: jc.wRmax,
            u_min: jc.wUmin,
            u_max: jc.wUmax,
            v_min: jc.wVmin,
            v_max: jc.wVmax,
            num_buttons: jc.wNumButtons,
            num_axes: jc.wNumAxes,
            caps: jc.wCaps,
        })
    }

    fn pos_ex(&self, id: u32) -> Result<RawJoyInfo, MmResult> {
        let mut ji: JOYINFOEX = unsafe { std::mem::zeroed() };
        ji.dwSize = std::mem::size_of::<JOYINFOEX>() as u32;
        ji.dwFlags = JOY_RETURNALL;

        let res = unsafe { joyGetPosEx(id + JOYSTICKID1, &mut ji) };
        if res != JOYERR_NOERROR {
            return Err(res);
        }

        Ok(RawJoyInfo {
            x: ji.dwXpos,
            y: ji.dwYpos,
            z: ji.dwZpos,
            r: ji.dwRpos,
            u: ji.dwUpos,
            v: ji.dwVpos,
            buttons: ji.dwButtons,
            pov: ji.dwPOV,
        })
    }
}
