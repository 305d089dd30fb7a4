#![no_main]

// Harness: decode_clock
// Feed arbitrary bytes to the decoder. Errors are expected; panics are not.
// Anything that decodes must survive an encode -> decode round trip.

use libfuzzer_sys::fuzz_target;
use vclock::VClock;

fuzz_target!(|bytes: &[u8]| {
    if let Ok(clock) = VClock::from_bytes(bytes) {
        let again = VClock::from_bytes(&clock.to_bytes()).expect("re-encoded clock decodes");
        assert_eq!(again, clock);
    }
});
