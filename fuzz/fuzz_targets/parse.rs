#![no_main]
use libfuzzer_sys::fuzz_target;
use name_formatter::NameFormatter;

fuzz_target!(|data: &str| {
    let parsed = NameFormatter::new().parse(data);
    let words: Vec<&str> = data.split_whitespace().collect();
    let fields: Vec<&str> = parsed.fields().flat_map(str::split_whitespace).collect();
    assert_eq!(words, fields);
});
