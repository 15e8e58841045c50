#![no_main]
use libfuzzer_sys::fuzz_target;
use tintlog::fmt::{Arg, sprintf};

fuzz_target!(|data: &str| {
    // Must not panic on any template, with too few, matching, or too many arguments
    let args = [
        Arg::from("fuzz"),
        Arg::from(-42),
        Arg::from(u64::MAX),
        Arg::from(f64::NAN),
        Arg::from(1e300),
        Arg::from(true),
        Arg::from('\u{10FFFF}'),
    ];
    for n in 0..=args.len() {
        let _ = sprintf(data, &args[..n]);
    }
});
