//! Shared runtime plumbing for the SCMS workspace: logging setup and
//! environment loading used by binaries and tests alike.

pub mod env;
pub mod utils;
