/*!
 * Memory Manager
 *
 * Contiguous first-fit allocator over a fixed simulated address space.
 *
 * The engine keeps an address-ordered `Vec` of blocks that partitions
 * `[0, total_size)` exactly: contiguous, no overlap, no gap. Adjacent free
 * blocks are always merged on release, so fragmentation only arises from
 * allocation churn. `compact` relocates every allocated block toward
 * address 0, collapsing all free fragments into one trailing block.
 *
 * Blocks are bookkeeping metadata only; no byte buffer backs them.
 */

use super::traits::{Allocator, Defragment, MemoryInfo};
use super::types::{
    BlockOwner, MemoryBlock, MemoryError, MemoryResult, MemorySnapshot, MemoryStats,
};
use crate::core::types::{Pid, Size};
use log::{info, warn};

/// Contiguous-memory allocator engine
#[derive(Debug, Clone)]
pub struct MemoryManager {
    /// Address-ordered partition of `[0, total_size)`
    blocks: Vec<MemoryBlock>,
    total_size: Size,
    allocated_size: Size,
    next_pid: Pid,
}

impl MemoryManager {
    /// Create an engine managing `total` bytes as a single free block
    pub fn with_capacity(total: Size) -> MemoryResult<Self> {
        if total == 0 {
            return Err(MemoryError::InvalidSize);
        }

        info!("Memory manager initialized with {} bytes (first-fit)", total);
        Ok(Self {
            blocks: vec![MemoryBlock::free(0, total)],
            total_size: total,
            allocated_size: 0,
            next_pid: 1,
        })
    }

    /// First-fit allocation: claim the lowest-address free block large enough
    pub fn allocate(&mut self, size: Size) -> MemoryResult<Pid> {
        if size == 0 {
            return Err(MemoryError::InvalidRequest);
        }

        let index = match self
            .blocks
            .iter()
            .position(|b| b.is_free() && b.size >= size)
        {
            Some(index) => index,
            None => {
                let largest_free = self
                    .blocks
                    .iter()
                    .filter(|b| b.is_free())
                    .map(|b| b.size)
                    .max()
                    .unwrap_or(0);
                let free_total = self.total_size - self.allocated_size;
                warn!(
                    "Allocation of {} bytes failed: largest free block is {} bytes ({} bytes free in total)",
                    size, largest_free, free_total
                );
                return Err(MemoryError::AllocationFailed {
                    requested: size,
                    largest_free,
                    free_total,
                });
            }
        };

        let pid = self.next_pid;
        self.next_pid += 1;

        let block = &mut self.blocks[index];
        let address = block.address;
        if block.size == size {
            // Exact fit: claim the block in place
            block.owner = BlockOwner::Process(pid);
        } else {
            // Split: allocated head at the original address, free remainder
            // shrinks and advances but keeps its position in the sequence
            block.address += size;
            block.size -= size;
            self.blocks
                .insert(index, MemoryBlock::allocated(address, size, pid));
        }

        self.allocated_size += size;
        info!("Allocated {} bytes at {} for process {}", size, address, pid);
        Ok(pid)
    }

    /// Release the block owned by `pid`, coalescing adjacent free blocks
    pub fn release(&mut self, pid: Pid) -> MemoryResult<()> {
        let mut index = self
            .blocks
            .iter()
            .position(|b| b.owner == BlockOwner::Process(pid))
            .ok_or_else(|| {
                warn!("Release failed: process {} not found", pid);
                MemoryError::NotFound(pid)
            })?;

        let size = self.blocks[index].size;
        self.allocated_size -= size;
        self.blocks[index].owner = BlockOwner::Free;

        // Absorb the run of free successors, then fold the result into the
        // run of free predecessors. Looping both ways collapses arbitrarily
        // long runs, not just one neighbor per side.
        while index + 1 < self.blocks.len() && self.blocks[index + 1].is_free() {
            let successor = self.blocks.remove(index + 1);
            self.blocks[index].size += successor.size;
        }
        while index > 0 && self.blocks[index - 1].is_free() {
            let merged = self.blocks.remove(index);
            index -= 1;
            self.blocks[index].size += merged.size;
        }

        info!("Freed {} bytes owned by process {}", size, pid);
        Ok(())
    }

    /// Relocate all allocated blocks back-to-back starting at address 0,
    /// preserving their relative order, and collapse the free space into a
    /// single trailing block
    pub fn compact(&mut self) {
        let mut compacted = Vec::with_capacity(self.blocks.len());
        let mut cursor = 0;

        for block in &self.blocks {
            if let BlockOwner::Process(pid) = block.owner {
                compacted.push(MemoryBlock::allocated(cursor, block.size, pid));
                cursor += block.size;
            }
        }

        let free_space = self.total_size - self.allocated_size;
        if free_space > 0 {
            compacted.push(MemoryBlock::free(cursor, free_space));
        }

        self.blocks = compacted;
        info!(
            "Compaction complete: {} bytes packed, {} bytes free in one block",
            self.allocated_size, free_space
        );
    }

    /// Read-only view of the current layout
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            total_size: self.total_size,
            allocated_size: self.allocated_size,
            free_size: self.total_size - self.allocated_size,
            blocks: self.blocks.clone(),
        }
    }

    /// Aggregate counters over the current layout
    pub fn stats(&self) -> MemoryStats {
        let free_fragments = self.blocks.iter().filter(|b| b.is_free()).count();
        let largest_free_block = self
            .blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .max()
            .unwrap_or(0);

        MemoryStats {
            total_size: self.total_size,
            allocated_size: self.allocated_size,
            free_size: self.total_size - self.allocated_size,
            usage_percentage: (self.allocated_size as f64 / self.total_size as f64) * 100.0,
            allocated_blocks: self.blocks.len() - free_fragments,
            free_fragments,
            largest_free_block,
        }
    }

    /// Get memory info as (total, allocated, free)
    pub fn info(&self) -> (Size, Size, Size) {
        (
            self.total_size,
            self.allocated_size,
            self.total_size - self.allocated_size,
        )
    }
}

// Implement trait interfaces
impl Allocator for MemoryManager {
    fn allocate(&mut self, size: Size) -> MemoryResult<Pid> {
        MemoryManager::allocate(self, size)
    }

    fn release(&mut self, pid: Pid) -> MemoryResult<()> {
        MemoryManager::release(self, pid)
    }
}

impl Defragment for MemoryManager {
    fn compact(&mut self) {
        MemoryManager::compact(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn snapshot(&self) -> MemorySnapshot {
        MemoryManager::snapshot(self)
    }

    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemoryManager::info(self)
    }
}
