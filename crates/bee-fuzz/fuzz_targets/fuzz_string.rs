#![no_main]
use bee_core::string;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the delimiter length, the rest is the haystack.
    let split_at = 1 + usize::from(data[0] % 3);
    let Ok(text) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    let delim: String = text.chars().take(split_at).collect();
    let haystack: String = text.chars().skip(split_at).collect();

    let parts = string::split(&haystack, &delim);
    if !delim.is_empty() && !haystack.ends_with(delim.as_str()) {
        assert_eq!(string::join(&parts, &delim), haystack);
    }

    let replaced = string::replace(&haystack, &delim, "", false);
    assert!(replaced.len() <= haystack.len());

    let count = usize::from(data[0]);
    let cut = string::cut(&haystack, count);
    assert!(cut.chars().count() <= haystack.chars().count());
    let _ = string::slice(&haystack, count, count / 2);
    let _ = string::trim_default(&haystack);
    let _ = string::capital(&haystack);

    let many = string::replace_many(&haystack, &[delim.as_str(), "a"], &["b", ""], data[0] & 1 == 1);
    let _ = many.len();
});
