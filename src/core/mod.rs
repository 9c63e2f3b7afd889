/*!
 * Core Module
 * Shared primitive types
 */

pub mod types;

pub use types::{Address, Pid, Size};
