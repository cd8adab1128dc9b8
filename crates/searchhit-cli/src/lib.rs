//! searchhit-cli
//! =============
//!
//! Command-line inspector for `searchhit-core` hit records.
//!
//! This crate primarily provides a binary (`searchhit`). The library target
//! exists so the crate has a rendered documentation page.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! searchhit --help
//! searchhit parse 's:20:10:0:5'
//! searchhit encode --compact hit.json
//! searchhit decode --compact 80000001000000100000002500...
//! searchhit location --kinds a,b,d,l hit.json
//! searchhit normalize --top-region 46 hit.json
//! ```
//!
//! Hits are read and printed as JSON, in the serde form of
//! `searchhit_core::Hit`. Set `RUST_LOG=debug` to see codec log records.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]
