use std::{alloc::Layout, ptr};

use libc::{c_void, free, posix_memalign, sbrk};

use crate::align;

pub unsafe fn print_alloc(
  layout: Layout,
  addr: *mut u8,
) {
  println!(
    "Allocated {} bytes (align {}), address = {:?}, program break = {:?}",
    layout.size(),
    layout.align(),
    addr,
    unsafe { sbrk(0) }
  );
}

/// Requests a block for `layout` from the C heap.
///
/// Returns null when the heap is exhausted. `layout.size()` must be non-zero.
pub unsafe fn allocate(layout: Layout) -> *mut u8 {
  debug_assert!(layout.size() != 0);

  let mut address: *mut c_void = ptr::null_mut();
  let alignment = align!(layout.align());

  let status = unsafe { posix_memalign(&mut address, alignment, layout.size()) };

  if status != 0 {
    return ptr::null_mut();
  }

  address as *mut u8
}

/// Returns a block obtained from [`allocate`] to the C heap.
pub unsafe fn deallocate(address: *mut u8) {
  if address.is_null() {
    return;
  }

  unsafe { free(address as *mut c_void) }
}
