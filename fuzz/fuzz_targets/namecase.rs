#![no_main]
use libfuzzer_sys::fuzz_target;
use human_namecase::{namecase, nametrim};

fuzz_target!(|data: &str| {
    let cased = namecase(data);
    assert_eq!(nametrim(&cased), cased);
});
