//! Zero-filled fallible allocation
//!
//! Large encoder buffers are allocated through these helpers so that an
//! allocation failure is reported (size and caller location) instead of
//! aborting the process.

use std::panic::Location;

use crate::error::{AllocError, AllocResult};

/// Allocate `size` zeroed bytes
#[track_caller]
pub fn zeroed_bytes(size: usize) -> AllocResult<Vec<u8>> {
    zeroed_slice::<u8>(size)
}

/// Allocate `len` default-initialized elements
///
/// The diagnostic tag is the caller's source location.
#[track_caller]
pub fn zeroed_slice<T: Default + Clone>(len: usize) -> AllocResult<Vec<T>> {
    let location = Location::caller();
    let size = len.saturating_mul(std::mem::size_of::<T>());

    if len.checked_mul(std::mem::size_of::<T>()).is_none() || size > isize::MAX as usize {
        return Err(alloc_failure(size, location));
    }

    let mut buffer = Vec::new();
    if buffer.try_reserve_exact(len).is_err() {
        return Err(alloc_failure(size, location));
    }
    buffer.resize(len, T::default());
    Ok(buffer)
}

fn alloc_failure(size: usize, location: &'static Location<'static>) -> AllocError {
    log::error!("Unable to allocate {} bytes at {}", size, location);
    AllocError::OutOfMemory { size, location }
}
