//! CLI plumbing shared by the `demos/` binaries (spec §6.3, SPEC_FULL.md §D).
//!
//! Mirrors the teacher's `cli` module split: constants/verbosity, usage
//! text, and argument parsing each get their own file.

pub mod args;
pub mod constants;
pub mod help;
