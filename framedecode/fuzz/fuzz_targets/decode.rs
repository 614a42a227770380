#![no_main]
use libfuzzer_sys::fuzz_target;

use framedecode::{Config, Decoder, Level};

fuzz_target!(|data: &[u8]| {
    let decoder = Decoder::new(Config::default().threshold(Level::Trace));
    if let Ok(frame) = decoder.decode(data) {
        for layer in frame.layers() {
            let _ = layer.to_string();
        }
        for diagnostic in frame.diagnostics() {
            let _ = diagnostic.to_string();
        }
    }
});
