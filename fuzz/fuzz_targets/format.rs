#![no_main]
use libfuzzer_sys::fuzz_target;
use name_formatter::{gaelic, NameFormatter};

fuzz_target!(|data: &str| {
    NameFormatter::new().format(data);
    gaelic::format(data);
});
