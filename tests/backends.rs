use joybridge::backends::joystick::{JoystickApi, LegacyBackend, MmResult, RawJoyCaps, RawJoyInfo};
use joybridge::backends::xinput::{buttons, RawGamepad, XInputApi, XInputBackend, XInputResult};
use joybridge::backends::NullBackend;
use joybridge::{BackendKind, ControllerBackend, ControllerState, Error, POV_NEUTRAL};

/// Legacy driver reporting one fixed position on every slot.
struct FixedJoy(RawJoyInfo);

impl JoystickApi for FixedJoy {
    fn num_devs(&self) -> u32 {
        16
    }
    fn dev_caps(&self, _id: u32) -> Result<RawJoyCaps, MmResult> {
        Ok(RawJoyCaps {
            name: "Joy".into(),
            x_max: 65535,
            y_max: 65535,
            num_buttons: 32,
            num_axes: 2,
            ..Default::default()
        })
    }
    fn pos_ex(&self, _id: u32) -> Result<RawJoyInfo, MmResult> {
        Ok(self.0)
    }
}

/// XInput reporting one fixed gamepad on every slot.
struct FixedPad(Option<RawGamepad>);

impl XInputApi for FixedPad {
    fn get_state(&self, _id: u32) -> Result<RawGamepad, XInputResult> {
        self.0.ok_or(1167)
    }
    fn get_capabilities(&self, _id: u32) -> Result<(), XInputResult> {
        self.0.map(|_| ()).ok_or(1167)
    }
}

fn centered_joy() -> RawJoyInfo {
    RawJoyInfo {
        x: 32767,
        y: 32767,
        z: 32767,
        r: 32767,
        u: 32767,
        v: 32767,
        buttons: 0,
        pov: 65535,
    }
}

#[test]
fn stick_up_reads_positive_on_both_backends() {
    let legacy = LegacyBackend::new(FixedJoy(RawJoyInfo { y: 0, r: 0, ..centered_joy() }));
    let xinput = XInputBackend::new(FixedPad(Some(RawGamepad {
        thumb_ly: i16::MAX,
        thumb_ry: i16::MAX,
        ..Default::default()
    })));

    let a = legacy.poll(0);
    let b = xinput.poll(0);
    assert_eq!(a.y, 1.0);
    assert_eq!(a.r, 1.0);
    assert!(b.y > 0.999 && b.r > 0.999);
}

#[test]
fn neutral_hat_uses_one_sentinel() {
    let legacy = LegacyBackend::new(FixedJoy(centered_joy()));
    let xinput = XInputBackend::new(FixedPad(Some(RawGamepad::default())));
    assert_eq!(legacy.poll(0).pov, POV_NEUTRAL);
    assert_eq!(xinput.poll(0).pov, POV_NEUTRAL);
    assert_eq!(POV_NEUTRAL, 655.35);
}

#[test]
fn hat_directions_agree() {
    let legacy = LegacyBackend::new(FixedJoy(RawJoyInfo { pov: 4500, ..centered_joy() }));
    let xinput = XInputBackend::new(FixedPad(Some(RawGamepad {
        buttons: buttons::DPAD_UP | buttons::DPAD_RIGHT,
        ..Default::default()
    })));
    assert_eq!(legacy.poll(0).pov, 45.0);
    assert_eq!(xinput.poll(0).pov, 45.0);
}

#[test]
fn legacy_keeps_all_32_buttons() {
    let legacy = LegacyBackend::new(FixedJoy(RawJoyInfo { buttons: u32::MAX, ..centered_joy() }));
    let s = legacy.poll(0);
    assert_eq!(s.button_map, u32::MAX);
    assert_eq!(s.pressed().count(), 32);
}

#[test]
fn disconnected_slots_reset_on_both_backends() {
    let xinput = XInputBackend::new(FixedPad(None));
    let s = xinput.poll(2);
    assert_eq!(s, ControllerState::disconnected());
    assert!(matches!(
        xinput.capabilities(2),
        Err(Error::InvalidDevice { id: 2, backend: BackendKind::XInput })
    ));
    assert!(xinput.connected_devices().is_empty());
}

#[test]
fn backends_as_trait_objects() {
    let backends: Vec<Box<dyn ControllerBackend>> = vec![
        Box::new(LegacyBackend::new(FixedJoy(centered_joy()))),
        Box::new(XInputBackend::new(FixedPad(Some(RawGamepad::default())))),
        Box::new(NullBackend::new()),
    ];
    let names: Vec<String> = backends.iter().map(|b| b.name(0).unwrap()).collect();
    assert_eq!(names, ["Joy0", "XInputController0", "NullController0"]);
    let counts: Vec<u32> = backends.iter().map(|b| b.device_count()).collect();
    assert_eq!(counts, [16, 4, 1]);
}

#[test]
fn caps_serialize_for_host_layer() {
    let xinput = XInputBackend::new(FixedPad(Some(RawGamepad::default())));
    let caps = xinput.capabilities(1).unwrap();
    let json = serde_json::to_value(&caps).unwrap();
    assert_eq!(json["name"], "XInputController1");
    assert_eq!(json["num_buttons"], 10);
    assert_eq!(json["z"]["min"], -255.0);
    assert_eq!(json["flags"]["has_pov_4dir"], true);
    assert_eq!(json["flags"]["has_v"], false);
}
