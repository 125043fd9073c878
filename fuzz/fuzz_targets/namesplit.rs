#![no_main]
use libfuzzer_sys::fuzz_target;
use human_namecase::{nameparts, namesplit};

fuzz_target!(|data: &str| {
    namesplit(data);
    assert!(nameparts(data).len() <= 2);
});
