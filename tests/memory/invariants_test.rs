/*!
 * Invariant Property Tests
 * Random operation sequences must never break the block-list invariants
 */

use memsim::{BlockOwner, MemoryManager};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Allocate(usize),
    Release(u32),
    Compact,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..400).prop_map(Op::Allocate),
        (1u32..60).prop_map(Op::Release),
        Just(Op::Compact),
    ]
}

/// I1-I4 plus conservation, checked against a snapshot
fn check_invariants(manager: &MemoryManager) -> Result<(), TestCaseError> {
    let snapshot = manager.snapshot();

    // I1: blocks partition [0, total) contiguously in address order
    let mut cursor = 0;
    for block in &snapshot.blocks {
        prop_assert_eq!(block.address, cursor);
        prop_assert!(block.size > 0);
        cursor = block.end();
    }
    prop_assert_eq!(cursor, snapshot.total_size);

    // I2: no two adjacent free blocks
    for pair in snapshot.blocks.windows(2) {
        prop_assert!(!(pair[0].is_free() && pair[1].is_free()));
    }

    // I3: counter matches the sum of allocated sizes
    let allocated: usize = snapshot
        .blocks
        .iter()
        .filter(|b| !b.is_free())
        .map(|b| b.size)
        .sum();
    prop_assert_eq!(allocated, snapshot.allocated_size);

    // Conservation
    prop_assert_eq!(
        snapshot.allocated_size + snapshot.free_size,
        snapshot.total_size
    );

    // I4: live process ids are unique
    let mut pids: Vec<u32> = snapshot
        .blocks
        .iter()
        .filter_map(|b| match b.owner {
            BlockOwner::Process(pid) => Some(pid),
            BlockOwner::Free => None,
        })
        .collect();
    let live = pids.len();
    pids.sort_unstable();
    pids.dedup();
    prop_assert_eq!(pids.len(), live);

    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_operation(
        ops in prop::collection::vec(op_strategy(), 1..80)
    ) {
        let mut manager = MemoryManager::with_capacity(1000).unwrap();
        for op in ops {
            match op {
                Op::Allocate(size) => {
                    let _ = manager.allocate(size);
                }
                Op::Release(pid) => {
                    let _ = manager.release(pid);
                }
                Op::Compact => manager.compact(),
            }
            check_invariants(&manager)?;
        }
    }

    #[test]
    fn prop_compact_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 1..60)
    ) {
        let mut manager = MemoryManager::with_capacity(1000).unwrap();
        for op in ops {
            match op {
                Op::Allocate(size) => {
                    let _ = manager.allocate(size);
                }
                Op::Release(pid) => {
                    let _ = manager.release(pid);
                }
                Op::Compact => manager.compact(),
            }
        }

        manager.compact();
        let once = manager.snapshot();
        manager.compact();
        prop_assert_eq!(manager.snapshot(), once);
    }

    #[test]
    fn prop_failed_allocation_leaves_state_untouched(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let mut manager = MemoryManager::with_capacity(1000).unwrap();
        for op in ops {
            match op {
                Op::Allocate(size) => {
                    let _ = manager.allocate(size);
                }
                Op::Release(pid) => {
                    let _ = manager.release(pid);
                }
                Op::Compact => manager.compact(),
            }
        }

        let before = manager.snapshot();
        // Larger than total memory, guaranteed to fail
        prop_assert!(manager.allocate(2000).is_err());
        prop_assert_eq!(manager.snapshot(), before);
    }
}
