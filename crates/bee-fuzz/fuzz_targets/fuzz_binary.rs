#![no_main]
use bee_core::binary;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the magic length, the rest is the buffer.
    let magic_len = usize::from(data[0] % 8);
    let bytes = &data[1..];
    let magic = &bytes[..magic_len.min(bytes.len())];

    let matched = binary::has_magic_prefix(bytes, magic);
    assert_eq!(matched, !magic.is_empty());
    assert!(!binary::has_magic_prefix(magic, bytes) || magic.len() >= bytes.len());
});
