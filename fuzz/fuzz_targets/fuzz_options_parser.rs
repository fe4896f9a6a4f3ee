#![no_main]

use dragon_curve_animator::{AppState, FractalOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // Akzeptierte Optionen müssen einen lauffähigen Startzustand ergeben
    if let Ok(options) = FractalOptions::from_toml_str(content) {
        let mut state = AppState::with_options(options);
        dragon_curve_animator::app::use_cases::tick::advance_frame(&mut state);
    }
});
