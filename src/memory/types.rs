/*!
 * Memory Types
 * Common types for the allocation simulator
 */

use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Invalid memory size: a simulation needs at least one byte")]
    InvalidSize,

    #[error("Invalid allocation request: size must be positive")]
    InvalidRequest,

    #[error("Allocation failed: requested {requested} bytes, largest free block {largest_free} bytes ({free_total} bytes free in total)")]
    AllocationFailed {
        requested: Size,
        largest_free: Size,
        free_total: Size,
    },

    #[error("Process {0} not found")]
    NotFound(Pid),
}

/// Ownership of one contiguous run of address space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockOwner {
    Free,
    Process(Pid),
}

impl BlockOwner {
    pub fn is_free(&self) -> bool {
        matches!(self, BlockOwner::Free)
    }
}

impl std::fmt::Display for BlockOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlockOwner::Free => write!(f, "Free"),
            BlockOwner::Process(pid) => write!(f, "Process {}", pid),
        }
    }
}

/// Memory block metadata: one contiguous run covering `[address, address + size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub address: Address,
    pub size: Size,
    pub owner: BlockOwner,
}

impl MemoryBlock {
    pub fn free(address: Address, size: Size) -> Self {
        Self {
            address,
            size,
            owner: BlockOwner::Free,
        }
    }

    pub fn allocated(address: Address, size: Size, pid: Pid) -> Self {
        Self {
            address,
            size,
            owner: BlockOwner::Process(pid),
        }
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_free()
    }

    /// One past the last address covered by this block
    pub fn end(&self) -> Address {
        self.address + self.size
    }
}

/// Read-only view of the engine state, consumed by the reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub total_size: Size,
    pub allocated_size: Size,
    pub free_size: Size,
    pub blocks: Vec<MemoryBlock>,
}

/// Aggregate memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_size: Size,
    pub allocated_size: Size,
    pub free_size: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_fragments: usize,
    pub largest_free_block: Size,
}
