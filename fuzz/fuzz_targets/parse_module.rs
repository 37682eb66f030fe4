#![no_main]
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let _ = funcscope::formats::parse_module(Path::new("<fuzz>"), data);
});
