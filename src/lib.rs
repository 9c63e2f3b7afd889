/*!
 * Memory Allocation Simulator
 * Contiguous first-fit allocation, fragmentation, and compaction
 */

pub mod core;
pub mod memory;
pub mod report;

// Re-exports
pub use memory::{
    Allocator, BlockOwner, Defragment, MemoryBlock, MemoryError, MemoryInfo, MemoryManager,
    MemoryResult, MemorySnapshot, MemoryStats,
};
