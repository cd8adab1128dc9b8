//! Workspace crate for `searchhit-core`, used by the demos under `demos/`.

pub use searchhit_core::*;
