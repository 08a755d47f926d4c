#![allow(unsafe_code)]
//! Tests for set behavior when storage allocation fails.
//!
//! A global allocator refuses every request on the current thread while
//! `refusing` runs, so each fallible operation hits its error path.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::ptr;

use eqset::{EqSet, EqSetError};
use rstest::{fixture, rstest};

struct RefusingAllocator;

thread_local! {
    static REFUSE: Cell<bool> = const { Cell::new(false) };
}

fn refusing_now() -> bool {
    REFUSE.try_with(Cell::get).unwrap_or(false)
}

unsafe impl GlobalAlloc for RefusingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if refusing_now() {
            return ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, pointer: *mut u8, layout: Layout) {
        unsafe { System.dealloc(pointer, layout) }
    }

    unsafe fn realloc(&self, pointer: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if refusing_now() {
            return ptr::null_mut();
        }
        unsafe { System.realloc(pointer, layout, new_size) }
    }
}

#[global_allocator]
static ALLOCATOR: RefusingAllocator = RefusingAllocator;

/// Runs `operation` with every allocation on this thread refused.
fn refusing<R>(operation: impl FnOnce() -> R) -> R {
    REFUSE.with(|refuse| refuse.set(true));
    let result = operation();
    REFUSE.with(|refuse| refuse.set(false));
    result
}

#[fixture]
fn numbers() -> EqSet<i32> {
    [1, 2, 3].into_iter().collect()
}

#[rstest]
fn test_try_add_reports_failure_and_keeps_contents(mut numbers: EqSet<i32>) {
    let result = refusing(|| numbers.try_add(4));

    assert!(matches!(
        result,
        Err(EqSetError::Allocation { requested: 4, .. })
    ));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
    assert!(!numbers.contains(&4));
}

#[rstest]
fn test_try_add_of_present_element_needs_no_storage(mut numbers: EqSet<i32>) {
    let result = refusing(|| numbers.try_add(2));

    assert_eq!(result, Ok(false));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_try_remove_reports_failure_and_keeps_contents(mut numbers: EqSet<i32>) {
    let result = refusing(|| numbers.try_remove(&2));

    assert!(matches!(
        result,
        Err(EqSetError::Allocation { requested: 2, .. })
    ));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_try_remove_of_last_element_needs_no_storage() {
    let mut single: EqSet<i32> = [5].into_iter().collect();

    let result = refusing(|| single.try_remove(&5));

    assert_eq!(result, Ok(true));
    assert!(single.is_empty());
}

#[rstest]
fn test_try_clone_reports_failure_and_keeps_source(numbers: EqSet<i32>) {
    let result = refusing(|| numbers.try_clone());

    assert!(matches!(
        result,
        Err(EqSetError::Allocation { requested: 3, .. })
    ));
    assert_eq!(numbers.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_try_assign_from_keeps_target_on_failure(numbers: EqSet<i32>) {
    let mut target: EqSet<i32> = [7, 8].into_iter().collect();

    let result = refusing(|| target.try_assign_from(&numbers));

    assert!(result.is_err());
    assert_eq!(target.as_slice(), &[7, 8]);
}

#[rstest]
fn test_set_is_usable_after_failure(mut numbers: EqSet<i32>) {
    let _ = refusing(|| numbers.try_add(4));

    assert_eq!(numbers.try_add(4), Ok(true));
    assert_eq!(numbers.as_slice(), &[1, 2, 3, 4]);
}
