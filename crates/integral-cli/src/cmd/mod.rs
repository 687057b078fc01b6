// crates/integral-cli/src/cmd/mod.rs

pub mod args;
pub mod bench;
pub mod query;
pub mod verify;
