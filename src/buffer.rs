use std::{
  alloc::{self, Layout},
  fmt,
  marker::PhantomData,
  mem,
  ops::{Index, IndexMut},
  ptr::{self, NonNull},
  slice,
};

use crate::heap;

/// A fixed-size, heap-allocated run of `len` initialised slots.
///
/// ```text
///   ArrayBuffer<T> { ptr, len = 4 }
///
///   ptr ──► ┌──────┬──────┬──────┬──────┐
///           │  T   │  T   │  T   │  T   │
///           └──────┴──────┴──────┴──────┘
///            slot 0                slot 3
/// ```
///
/// Every slot holds a live `T` from construction until the buffer is dropped.
/// The buffer is never resized in place and cannot be cloned: ownership moves
/// only through [`ArrayBuffer::swap`] or a plain Rust move.
pub struct ArrayBuffer<T> {
  ptr: NonNull<T>,
  len: usize,
  _marker: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its slots, like `Box<[T]>`.
unsafe impl<T: Send> Send for ArrayBuffer<T> {}
unsafe impl<T: Sync> Sync for ArrayBuffer<T> {}

/// Drops the slots written so far if `T::default()` panics mid-fill.
struct FillGuard<T> {
  ptr: NonNull<T>,
  initialized: usize,
  layout: Layout,
}

impl<T> Drop for FillGuard<T> {
  fn drop(&mut self) {
    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
        self.ptr.as_ptr(),
        self.initialized,
      ));

      if self.layout.size() != 0 {
        heap::deallocate(self.ptr.as_ptr() as *mut u8);
      }
    }
  }
}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
  panic!("capacity overflow");
}

impl<T> ArrayBuffer<T> {
  /// A buffer with no slots. Does not allocate.
  pub const fn empty() -> Self {
    Self {
      ptr: NonNull::dangling(),
      len: 0,
      _marker: PhantomData,
    }
  }

  /// Number of slots owned by this buffer.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Address of slot 0. Dangling (but non-null) for an empty buffer.
  #[inline]
  pub fn as_ptr(&self) -> *const T {
    self.ptr.as_ptr()
  }

  #[inline]
  pub fn as_mut_ptr(&mut self) -> *mut T {
    self.ptr.as_ptr()
  }

  #[inline]
  pub fn as_slice(&self) -> &[T] {
    // SAFETY: `ptr` is valid for `len` initialised slots (dangling when 0).
    unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    // SAFETY: as above, and `&mut self` guarantees exclusive access.
    unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
  }

  /// Exchanges the allocations of two buffers. No slot is touched.
  #[inline]
  pub fn swap(
    &mut self,
    other: &mut Self,
  ) {
    mem::swap(&mut self.ptr, &mut other.ptr);
    mem::swap(&mut self.len, &mut other.len);
  }
}

impl<T: Default> ArrayBuffer<T> {
  /// Allocates `len` slots and fills each with `T::default()`.
  ///
  /// `len == 0` and zero-sized `T` never touch the heap. Running out of
  /// memory aborts through [`alloc::handle_alloc_error`]; a byte size that
  /// does not fit in `isize` panics.
  pub fn allocate(len: usize) -> Self {
    if len == 0 {
      return Self::empty();
    }

    let layout = Layout::array::<T>(len).unwrap_or_else(|_| capacity_overflow());

    let ptr = if layout.size() == 0 {
      NonNull::dangling()
    } else {
      let address = unsafe { heap::allocate(layout) };

      #[cfg(feature = "trace")]
      unsafe {
        heap::print_alloc(layout, address)
      };

      match NonNull::new(address as *mut T) {
        Some(ptr) => ptr,
        None => alloc::handle_alloc_error(layout),
      }
    };

    let mut guard = FillGuard {
      ptr,
      initialized: 0,
      layout,
    };

    while guard.initialized < len {
      unsafe { ptr.as_ptr().add(guard.initialized).write(T::default()) };
      guard.initialized += 1;
    }

    mem::forget(guard);

    Self {
      ptr,
      len,
      _marker: PhantomData,
    }
  }
}

impl<T> Default for ArrayBuffer<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T> Drop for ArrayBuffer<T> {
  fn drop(&mut self) {
    unsafe {
      ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));

      if self.len != 0 && mem::size_of::<T>() != 0 {
        heap::deallocate(self.ptr.as_ptr() as *mut u8);
      }
    }
  }
}

impl<T> Index<usize> for ArrayBuffer<T> {
  type Output = T;

  #[inline]
  fn index(
    &self,
    offset: usize,
  ) -> &T {
    &self.as_slice()[offset]
  }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
  #[inline]
  fn index_mut(
    &mut self,
    offset: usize,
  ) -> &mut T {
    &mut self.as_mut_slice()[offset]
  }
}

impl<T> fmt::Debug for ArrayBuffer<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("ArrayBuffer")
      .field("ptr", &self.ptr)
      .field("len", &self.len)
      .finish()
  }
}
