use std::time::{Duration, Instant};

use joybridge::{Controller, ControllerBackend, ControllerCaps, ControllerConfig, Manager};

fn main() {
    env_logger::init();

    if !joybridge::is_supported() {
        log::warn!("no controller drivers on this platform; polling null controllers");
    }

    let config = match std::env::args().nth(1) {
        Some(path) => ControllerConfig::load(&path).expect("load config"),
        None => ControllerConfig::default(),
    };
    let manager = Manager::new(config);

    println!(
        "Legacy slots: {}, connected: {:?}",
        manager.legacy().device_count(),
        manager.connected_legacy()
    );
    println!("XInput connected: {:?}", manager.connected_xinput());

    let mut pads: Vec<_> = manager
        .connected_xinput()
        .into_iter()
        .map(|id| manager.create_xinput(id).expect("xinput slot"))
        .collect();
    let mut sticks: Vec<_> = manager
        .connected_legacy()
        .into_iter()
        .map(|id| manager.create_legacy(id).expect("legacy slot"))
        .collect();

    for caps in pads.iter().map(|p| p.caps()).chain(sticks.iter().map(|s| s.caps())) {
        print_caps(caps);
    }

    // Print a compact line per controller at a fixed rate
    let flush_every = Duration::from_millis(40);
    let mut last_flush = Instant::now();

    loop {
        pads.iter_mut().for_each(|p| {
            p.poll();
        });
        sticks.iter_mut().for_each(|s| {
            s.poll();
        });

        if last_flush.elapsed() >= flush_every {
            pads.iter().for_each(print_line);
            sticks.iter().for_each(print_line);
            last_flush = Instant::now();
        }

        // Keep CPU usage sane
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn print_caps(caps: &ControllerCaps) {
    println!("== {} ==", caps.name);
    for (axis, range) in caps.axes() {
        println!("  {axis}: [{}..{}]", range.min, range.max);
    }
    println!(
        "  buttons={} axes={} flags={:?}",
        caps.num_buttons, caps.num_axes, caps.flags
    );
}

fn print_line<B: ControllerBackend>(c: &Controller<B>) {
    if !c.is_connected() {
        println!("{}: disconnected", c.name());
        return;
    }
    let pressed: Vec<usize> = c.state().pressed().collect();
    println!(
        "{}: X={:.3} Y={:.3} RU=({:.3},{:.3}) LT={:.2} RT={:.2} POV=({:.1},{:.1}) {:?}",
        c.name(),
        c.xy().x(),
        c.xy().y(),
        c.ru().x(),
        c.ru().y(),
        c.left_trigger().get(),
        c.right_trigger().get(),
        c.pov().x(),
        c.pov().y(),
        pressed
    );
}
