#![no_main]
use cellgrid_core::read_size;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to the size reader.
    // Must not panic -- returning Err is fine.
    let _ = read_size(data);
});
