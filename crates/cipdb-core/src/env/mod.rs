//! Environment access for the breakpoint gate
//!
//! The gate reads three variables on every call:
//! - `CIPDB`: disable flag, a falsy word (`false`, `0`, `no`, `off`) skips every breakpoint
//! - `CIPDB_ID`: a single allowed breakpoint id
//! - `CIPDB_IDS`: comma-separated allowed breakpoint ids
//!
//! Reads go through [`EnvSource`] so the engine can be driven from the real
//! process environment or from an in-memory map.

mod assignment;
mod keys;
mod snapshot;
mod source;
mod vocab;

pub use assignment::EnvAssignment;
pub use keys::{EnvKeys, DISABLE_VAR, IDS_VAR, ID_VAR};
pub use snapshot::{EnvSnapshot, IdMode};
pub use source::{EnvSource, MapEnv, ProcessEnv};
pub use vocab::{falsy_word, split_ids, truthy_word, FALSY_WORDS, TRUTHY_WORDS};
