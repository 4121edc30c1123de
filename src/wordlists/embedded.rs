//! Embedded word lists
//!
//! Raw per-language lists compiled into the binary at build time: the secret
//! candidates (`ENGLISH`, `FRENCH`) and the extra words accepted only as guesses
//! (`ENGLISH_ALLOWED`, `FRENCH_ALLOWED`).

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/en.rs"));
include!(concat!(env!("OUT_DIR"), "/fr.rs"));
include!(concat!(env!("OUT_DIR"), "/en_allowed.rs"));
include!(concat!(env!("OUT_DIR"), "/fr_allowed.rs"));
