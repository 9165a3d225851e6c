/*!
 * Memory Manager Tests
 * Allocation, release and error handling
 */

use memsim::memory::{
    Allocator, Hole, MemoryError, MemoryInfo, MemoryManager, MemoryPressure, PlacementStrategy,
    Segment,
};
use pretty_assertions::assert_eq;

#[test]
fn test_memory_manager_initialization() {
    let mem_mgr = MemoryManager::new();
    let (total, used, available) = mem_mgr.info();

    assert_eq!(total, 80);
    assert_eq!(used, 0);
    assert_eq!(available, total);
    assert_eq!(mem_mgr.holes(), &[Hole::new(0, 79)]);
    assert_eq!(mem_mgr.max_hole(), 80);
    assert!(mem_mgr.segments().is_empty());
    assert_eq!(mem_mgr.show(), ".".repeat(80));
    mem_mgr.verify().unwrap();
}

#[test]
fn test_custom_capacity() {
    let mut mem_mgr = MemoryManager::with_capacity(16);
    mem_mgr.allocate('A', 16, PlacementStrategy::FirstFit).unwrap();

    assert_eq!(mem_mgr.show(), "A".repeat(16));
    assert!(mem_mgr.holes().is_empty());
    assert_eq!(mem_mgr.max_hole(), 0);
    mem_mgr.verify().unwrap();
}

#[test]
fn test_basic_allocation() {
    let mut mem_mgr = MemoryManager::new();

    let segment = mem_mgr
        .allocate('P', 12, PlacementStrategy::FirstFit)
        .expect("allocation should succeed");

    assert_eq!(segment, Segment::new('P', 0, 12));
    assert_eq!(mem_mgr.used(), 12);
    assert_eq!(mem_mgr.holes(), &[Hole::new(12, 79)]);
    assert_eq!(mem_mgr.max_hole(), 68);
}

#[test]
fn test_request_by_symbol() {
    let mut mem_mgr = MemoryManager::new();

    let segment = mem_mgr.request('Q', 5, 'W').unwrap();
    assert_eq!(segment.begin, 0);
    assert_eq!(mem_mgr.owner_usage('Q'), 5);
}

#[test]
fn test_out_of_memory() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 70, PlacementStrategy::FirstFit).unwrap();
    let before = mem_mgr.clone();

    let result = mem_mgr.allocate('B', 11, PlacementStrategy::BestFit);

    assert_eq!(
        result,
        Err(MemoryError::InsufficientMemory {
            requested: 11,
            largest_hole: 10,
        })
    );
    assert_eq!(mem_mgr, before);
}

#[test]
fn test_oom_despite_enough_total_free_space() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 30, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('B', 20, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.release('A');

    // 60 units free, split 30 + 30
    assert_eq!(mem_mgr.available(), 60);
    let result = mem_mgr.allocate('C', 31, PlacementStrategy::FirstFit);
    assert!(matches!(result, Err(MemoryError::InsufficientMemory { .. })));

    let stats = mem_mgr.stats();
    assert!(stats.is_fragmented());
    assert!((stats.external_fragmentation - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_unknown_algorithm() {
    let mut mem_mgr = MemoryManager::new();
    let before = mem_mgr.clone();

    let result = mem_mgr.request('A', 10, 'X');

    assert_eq!(result, Err(MemoryError::UnknownAlgorithm('X')));
    assert_eq!(mem_mgr, before);
}

#[test]
fn test_size_checked_before_algorithm() {
    let mut mem_mgr = MemoryManager::new();
    let result = mem_mgr.request('A', 81, 'X');
    assert!(matches!(result, Err(MemoryError::InsufficientMemory { .. })));
}

#[test]
fn test_zero_sized_allocation() {
    let mut mem_mgr = MemoryManager::new();
    let result = mem_mgr.allocate('A', 0, PlacementStrategy::FirstFit);
    assert_eq!(result, Err(MemoryError::ZeroSizedAllocation));
    assert_eq!(mem_mgr, MemoryManager::new());
}

#[test]
fn test_release_returns_freed_units() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 10, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('B', 10, PlacementStrategy::FirstFit).unwrap();

    assert_eq!(mem_mgr.release('A'), 10);
    assert_eq!(mem_mgr.holes(), &[Hole::new(0, 9), Hole::new(20, 79)]);
    assert_eq!(mem_mgr.show(), format!("{}{}{}", ".".repeat(10), "B".repeat(10), ".".repeat(60)));
    mem_mgr.verify().unwrap();
}

#[test]
fn test_release_unknown_owner_is_noop() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 10, PlacementStrategy::FirstFit).unwrap();
    let before = mem_mgr.clone();

    assert_eq!(mem_mgr.release('Z'), 0);
    assert_eq!(mem_mgr, before);
}

#[test]
fn test_owner_with_multiple_segments() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 10, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('B', 10, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('A', 15, PlacementStrategy::FirstFit).unwrap();

    assert_eq!(mem_mgr.segments_of('A').len(), 2);
    assert_eq!(mem_mgr.owner_usage('A'), 25);

    // One release frees every segment of the owner
    assert_eq!(mem_mgr.release('A'), 25);
    assert!(mem_mgr.segments_of('A').is_empty());
    assert_eq!(mem_mgr.segments(), &[Segment::new('B', 10, 10)]);
    assert_eq!(mem_mgr.holes(), &[Hole::new(0, 9), Hole::new(20, 79)]);
}

#[test]
fn test_adjacent_frees_merge_into_one_hole() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 10, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('B', 10, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('C', 10, PlacementStrategy::FirstFit).unwrap();

    mem_mgr.release('A');
    mem_mgr.release('B');

    assert_eq!(mem_mgr.holes(), &[Hole::new(0, 19), Hole::new(30, 79)]);
    assert_eq!(mem_mgr.max_hole(), 50);
}

#[test]
fn test_stats_and_pressure() {
    let mut mem_mgr = MemoryManager::new();
    assert_eq!(mem_mgr.pressure(), MemoryPressure::Low);

    mem_mgr.allocate('A', 50, PlacementStrategy::FirstFit).unwrap();
    mem_mgr.allocate('B', 20, PlacementStrategy::FirstFit).unwrap();

    let stats = mem_mgr.stats();
    assert_eq!(stats.capacity, 80);
    assert_eq!(stats.used, 70);
    assert_eq!(stats.available, 10);
    assert_eq!(stats.segments, 2);
    assert_eq!(stats.owners, 2);
    assert_eq!(stats.holes, 1);
    assert_eq!(stats.largest_hole, 10);
    assert_eq!(stats.external_fragmentation, 0.0);
    assert_eq!(mem_mgr.pressure(), MemoryPressure::High);
}

#[test]
fn test_stats_serialize() {
    let mut mem_mgr = MemoryManager::new();
    mem_mgr.allocate('A', 20, PlacementStrategy::FirstFit).unwrap();

    let json = serde_json::to_value(mem_mgr.stats()).unwrap();
    assert_eq!(json["used"], 20);
    assert_eq!(json["largest_hole"], 60);
}

/// Drives any allocator through the trait surface
fn fill_and_drain<A: Allocator + MemoryInfo>(allocator: &mut A) {
    for owner in ['A', 'B', 'C', 'D'] {
        allocator
            .allocate(owner, 20, PlacementStrategy::FirstFit)
            .unwrap();
    }
    assert_eq!(allocator.info().2, 0);

    allocator.release('B');
    allocator.release('D');
    let report = allocator.compact();
    assert_eq!(report.relocated, 1);
    assert_eq!(allocator.owner_usage('C'), 20);
    assert_eq!(allocator.stats().holes, 1);
}

#[test]
fn test_allocator_traits() {
    let mut mem_mgr = MemoryManager::new();
    fill_and_drain(&mut mem_mgr);
    assert_eq!(mem_mgr.show(), format!("{}{}{}", "A".repeat(20), "C".repeat(20), ".".repeat(40)));
}
