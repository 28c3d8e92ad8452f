#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate wrapped_base64;

mod utils;

fuzz_target!(|data: &[u8]| {
    let encoded = wrapped_base64::encode(data).unwrap();
    let rewrapped = utils::rewrap(data, encoded.as_bytes());

    let decoded = wrapped_base64::decode(&rewrapped).unwrap();
    assert_eq!(data, decoded.as_slice());
});
