#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate wrapped_base64;

fuzz_target!(|data: &[u8]| {
    let encoded = wrapped_base64::encode(data).unwrap();
    assert_eq!(Some(encoded.len()), wrapped_base64::encoded_len(data.len()));

    let decoded = wrapped_base64::decode(&encoded).unwrap();
    assert_eq!(data, decoded.as_slice());
});
