//! Fuzz target for dotted object identifier parsing.
//!
//! Goal: parsing never panics, and anything that parses prints back to text that parses to
//! the same identifier.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_oid_parser
//! ```

#![no_main]

use certguard::types::Oid;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = certguard_input::fuzz::parse_oid(text);

        if let Ok(oid) = text.parse::<Oid>() {
            let again: Oid = oid.to_string().parse().expect("canonical form parses");
            assert_eq!(oid, again);
        }
    }
});
