//! Process exit codes. Scripts depend on these values.

pub const SUCCESS: i32 = 0;
/// The command ran, but some evaluation step or smoke test failed.
pub const FAILURES: i32 = 1;
/// Bad configuration, missing credentials, unreadable inputs.
pub const CONFIG_ERROR: i32 = 2;
