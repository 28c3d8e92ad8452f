#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate wrapped_base64;

use wrapped_base64::*;

fuzz_target!(|data: &[u8]| {
    // The data probably isn't valid base64 input, but as long as it returns an error instead
    // of crashing, that's correct behavior.
    let decoded = decode(&data);

    // the size query must agree with decoding
    match decoded_len(&data) {
        Ok(len) => assert_eq!(len, decoded.unwrap().len()),
        Err(e) => assert_eq!(Err(e), decoded),
    }
});
