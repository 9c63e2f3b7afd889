/*!
 * Memory Traits
 * Seams between the engine and its callers
 */

use super::types::{MemoryResult, MemorySnapshot, MemoryStats};
use crate::core::types::{Pid, Size};

/// First-fit allocator interface
pub trait Allocator {
    /// Allocate a block, returning the assigned process id
    fn allocate(&mut self, size: Size) -> MemoryResult<Pid>;

    /// Release the block owned by a process
    fn release(&mut self, pid: Pid) -> MemoryResult<()>;
}

/// Defragmentation by relocation
pub trait Defragment {
    /// Pack allocated blocks back-to-back starting at address 0
    fn compact(&mut self);
}

/// Read-only state provider
pub trait MemoryInfo {
    /// Snapshot of the full block layout
    fn snapshot(&self) -> MemorySnapshot;

    /// Aggregate counters
    fn stats(&self) -> MemoryStats;

    /// Memory info as (total, allocated, free)
    fn info(&self) -> (Size, Size, Size);
}
