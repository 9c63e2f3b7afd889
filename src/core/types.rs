/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type. Assigned by the engine starting at 1, never reused.
pub type Pid = u32;

/// Address type: byte offset from the start of simulated memory
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;
