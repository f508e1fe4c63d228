//! Fuzz target for certificate document parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_document_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Documents are JSON, so only UTF-8 is interesting.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = certguard_input::fuzz::parse_documents(text);
    }
});
