use std::{
  cmp::Ordering,
  fmt,
  hash::{Hash, Hasher},
  iter::FusedIterator,
  mem,
  ops::{Deref, DerefMut, Index, IndexMut},
  slice::{self, SliceIndex},
};

use crate::{buffer::ArrayBuffer, error::VectorError};

/// Capacity request that selects the reserving constructor.
///
/// Built with [`reserve`] and consumed by `SimpleVector::from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveProxy {
  capacity: usize,
}

impl ReserveProxy {
  pub fn capacity(&self) -> usize {
    self.capacity
  }
}

/// Wraps `capacity_to_reserve` so it can be turned into an empty vector.
///
/// ```rust
/// use rvector::{reserve, SimpleVector};
///
/// let v = SimpleVector::<i32>::from(reserve(5));
/// assert_eq!(v.capacity(), 5);
/// assert!(v.is_empty());
/// ```
pub fn reserve(capacity_to_reserve: usize) -> ReserveProxy {
  ReserveProxy {
    capacity: capacity_to_reserve,
  }
}

/// Builds a [`SimpleVector`] from a literal list of values.
///
/// ```rust
/// use rvector::svec;
///
/// let v = svec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let filled = svec![7u8; 4];
/// assert_eq!(filled.as_slice(), &[7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! svec {
  () => {
    $crate::SimpleVector::new()
  };
  ($value:expr; $count:expr) => {
    $crate::SimpleVector::from_elem($count, $value)
  };
  ($($value:expr),+ $(,)?) => {
    $crate::SimpleVector::from([$($value),+])
  };
}

/// A growable array backed by a single [`ArrayBuffer`].
///
/// ```text
///   SimpleVector { buffer, size = 3 }        capacity = buffer.len() = 4
///
///   ┌──────┬──────┬──────┬──────┐
///   │  a   │  b   │  c   │ (..) │
///   └──────┴──────┴──────┴──────┘
///   ◄──── logical [0, size) ───►◄ spare ►
/// ```
///
/// Slots past `size` always hold valid `T` values, but their contents are
/// unspecified. Positions handed out by [`insert`](Self::insert) and
/// [`erase`](Self::erase) are plain indices; they stop referring to the same
/// element after any growth event or shifting operation.
pub struct SimpleVector<T> {
  buffer: ArrayBuffer<T>,
  size: usize,
}

impl<T> SimpleVector<T> {
  /// An empty vector. Does not allocate.
  pub const fn new() -> Self {
    Self {
      buffer: ArrayBuffer::empty(),
      size: 0,
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.size
  }

  #[inline]
  pub fn capacity(&self) -> usize {
    self.buffer.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  #[inline]
  pub fn as_slice(&self) -> &[T] {
    &self.buffer.as_slice()[..self.size]
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    &mut self.buffer.as_mut_slice()[..self.size]
  }

  /// Address of the first slot. Changes on every growth event.
  #[inline]
  pub fn as_ptr(&self) -> *const T {
    self.buffer.as_ptr()
  }

  /// Returns the element at `index`, or [`VectorError::OutOfRange`] when
  /// `index >= len()`.
  pub fn at(
    &self,
    index: usize,
  ) -> Result<&T, VectorError> {
    self.as_slice().get(index).ok_or(VectorError::OutOfRange {
      index,
      size: self.size,
    })
  }

  /// Mutable counterpart of [`at`](Self::at).
  pub fn at_mut(
    &mut self,
    index: usize,
  ) -> Result<&mut T, VectorError> {
    let size = self.size;

    self
      .as_mut_slice()
      .get_mut(index)
      .ok_or(VectorError::OutOfRange { index, size })
  }

  /// Drops the last element from the logical range. Does nothing when empty.
  ///
  /// Capacity is kept; the value stays in its slot until overwritten.
  pub fn pop_back(&mut self) {
    if self.size != 0 {
      self.size -= 1;
    }
  }

  /// Sets the size to zero without touching capacity.
  pub fn clear(&mut self) {
    self.size = 0;
  }

  /// Exchanges contents with `other` in constant time.
  pub fn swap(
    &mut self,
    other: &mut Self,
  ) {
    self.buffer.swap(&mut other.buffer);
    mem::swap(&mut self.size, &mut other.size);
  }

  /// Moves the whole vector out, leaving `self` empty with zero capacity.
  ///
  /// No element is copied: the buffer changes owner.
  pub fn take(&mut self) -> Self {
    let mut taken = Self::new();
    taken.swap(self);
    taken
  }

  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.as_mut_slice().iter_mut()
  }
}

impl<T: Default> SimpleVector<T> {
  /// `size` default values; size and capacity are both `size`.
  pub fn with_size(size: usize) -> Self {
    Self {
      buffer: ArrayBuffer::allocate(size),
      size,
    }
  }

  /// An empty vector with room for at least `capacity` elements.
  pub fn with_capacity(capacity: usize) -> Self {
    let mut vector = Self::new();
    vector.reserve(capacity);
    vector
  }

  /// Grows capacity to exactly `new_capacity`. Never shrinks.
  ///
  /// Elements are moved into the new buffer, which is only swapped in once
  /// every slot has been written, so a failed allocation leaves `self` intact.
  pub fn reserve(
    &mut self,
    new_capacity: usize,
  ) {
    if new_capacity <= self.capacity() {
      return;
    }

    let mut replacement = ArrayBuffer::allocate(new_capacity);
    let live = &mut self.buffer.as_mut_slice()[..self.size];

    for (slot, element) in replacement.as_mut_slice().iter_mut().zip(live) {
      mem::swap(slot, element);
    }

    self.buffer.swap(&mut replacement);
  }

  /// Changes the logical size, default-filling any newly exposed elements.
  ///
  /// Growing past capacity reserves `max(new_size, 2 * capacity)`.
  pub fn resize(
    &mut self,
    new_size: usize,
  ) {
    if new_size <= self.size {
      self.size = new_size;
    } else if new_size <= self.capacity() {
      self.buffer.as_mut_slice()[self.size..new_size].fill_with(T::default);
      self.size = new_size;
    } else {
      let grown = new_size.max(self.capacity().saturating_mul(2));
      self.reserve(grown);
      self.size = new_size;
    }
  }

  /// Appends `value`, doubling capacity (or going from 0 to 1) when full.
  pub fn push_back(
    &mut self,
    value: T,
  ) {
    if self.size == self.capacity() {
      let grown = match self.capacity() {
        0 => 1,
        capacity => capacity.saturating_mul(2),
      };
      self.reserve(grown);
    }

    self.buffer[self.size] = value;
    self.size += 1;
  }

  /// Inserts `value` at `index`, shifting the tail one slot to the right.
  ///
  /// Returns the index of the inserted element.
  ///
  /// # Panics
  ///
  /// Panics if `index > len()`.
  pub fn insert(
    &mut self,
    index: usize,
    value: T,
  ) -> usize {
    assert!(
      index <= self.size,
      "insertion index (is {index}) should be <= size (is {})",
      self.size
    );

    if self.is_empty() {
      self.push_back(value);
      return 0;
    }

    if self.size == self.capacity() {
      self.reserve(self.capacity().saturating_mul(2));
    }

    let size = self.size;
    let slots = self.buffer.as_mut_slice();

    slots[size] = value;
    slots[index..=size].rotate_right(1);

    self.size += 1;
    index
  }

  /// Removes the element at `index`, shifting the tail one slot to the left.
  ///
  /// Returns `index`, which now refers to the element that followed the
  /// removed one (or equals `len()` if the last element was removed).
  ///
  /// # Panics
  ///
  /// Panics if `index >= len()`.
  pub fn erase(
    &mut self,
    index: usize,
  ) -> usize {
    assert!(
      index < self.size,
      "erase index (is {index}) should be < size (is {})",
      self.size
    );

    let size = self.size;
    let slots = self.buffer.as_mut_slice();

    slots[index..size].rotate_left(1);
    slots[size - 1] = T::default();

    self.size -= 1;
    index
  }
}

impl<T: Clone + Default> SimpleVector<T> {
  /// `size` copies of `value`; size and capacity are both `size`.
  pub fn from_elem(
    size: usize,
    value: T,
  ) -> Self {
    let mut buffer = ArrayBuffer::allocate(size);
    buffer.as_mut_slice().fill(value);

    Self { buffer, size }
  }
}

impl<T> Default for SimpleVector<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone + Default> Clone for SimpleVector<T> {
  /// Copies the logical elements into a buffer of the same capacity.
  fn clone(&self) -> Self {
    let mut buffer = ArrayBuffer::allocate(self.capacity());
    buffer.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());

    Self {
      buffer,
      size: self.size,
    }
  }

  fn clone_from(
    &mut self,
    source: &Self,
  ) {
    let mut temp = source.clone();
    self.swap(&mut temp);
  }
}

impl<T: Default> From<ReserveProxy> for SimpleVector<T> {
  fn from(proxy: ReserveProxy) -> Self {
    Self::with_capacity(proxy.capacity)
  }
}

impl<T: Default, const N: usize> From<[T; N]> for SimpleVector<T> {
  fn from(values: [T; N]) -> Self {
    let mut buffer = ArrayBuffer::allocate(N);

    for (slot, value) in buffer.as_mut_slice().iter_mut().zip(values) {
      *slot = value;
    }

    Self { buffer, size: N }
  }
}

impl<T: Clone + Default> From<&[T]> for SimpleVector<T> {
  fn from(values: &[T]) -> Self {
    let mut buffer = ArrayBuffer::allocate(values.len());
    buffer.as_mut_slice().clone_from_slice(values);

    Self {
      buffer,
      size: values.len(),
    }
  }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
  fn extend<I: IntoIterator<Item = T>>(
    &mut self,
    iter: I,
  ) {
    for value in iter {
      self.push_back(value);
    }
  }
}

impl<T: Default> FromIterator<T> for SimpleVector<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let iter = iter.into_iter();
    let mut vector = Self::with_capacity(iter.size_hint().0);
    vector.extend(iter);
    vector
  }
}

impl<T> Deref for SimpleVector<T> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &[T] {
    self.as_slice()
  }
}

impl<T> DerefMut for SimpleVector<T> {
  #[inline]
  fn deref_mut(&mut self) -> &mut [T] {
    self.as_mut_slice()
  }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
  type Output = I::Output;

  #[inline]
  fn index(
    &self,
    index: I,
  ) -> &Self::Output {
    Index::index(self.as_slice(), index)
  }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
  #[inline]
  fn index_mut(
    &mut self,
    index: I,
  ) -> &mut Self::Output {
    IndexMut::index_mut(self.as_mut_slice(), index)
  }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.size == other.size && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
  }
}

impl<T: Eq> Eq for SimpleVector<T> {}

fn lexicographical_less<T: PartialOrd>(
  lhs: &[T],
  rhs: &[T],
) -> bool {
  for (l, r) in lhs.iter().zip(rhs) {
    if l < r {
      return true;
    }
    if r < l {
      return false;
    }
  }

  lhs.len() < rhs.len()
}

// `le`, `gt` and `ge` are all spelled in terms of `lt`.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
  fn partial_cmp(
    &self,
    other: &Self,
  ) -> Option<Ordering> {
    self.as_slice().partial_cmp(other.as_slice())
  }

  fn lt(
    &self,
    other: &Self,
  ) -> bool {
    lexicographical_less(self.as_slice(), other.as_slice())
  }

  fn le(
    &self,
    other: &Self,
  ) -> bool {
    !(other < self)
  }

  fn gt(
    &self,
    other: &Self,
  ) -> bool {
    other < self
  }

  fn ge(
    &self,
    other: &Self,
  ) -> bool {
    !(self < other)
  }
}

impl<T: Ord> Ord for SimpleVector<T> {
  fn cmp(
    &self,
    other: &Self,
  ) -> Ordering {
    self.as_slice().cmp(other.as_slice())
  }
}

impl<T: Hash> Hash for SimpleVector<T> {
  fn hash<H: Hasher>(
    &self,
    state: &mut H,
  ) {
    self.as_slice().hash(state);
  }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}

/// Owning iterator over the logical elements of a [`SimpleVector`].
///
/// Each element is moved out and its slot refilled with `T::default()`.
pub struct IntoIter<T> {
  vector: SimpleVector<T>,
  front: usize,
}

impl<T: Default> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.front == self.vector.size {
      return None;
    }

    let value = mem::take(&mut self.vector.buffer[self.front]);
    self.front += 1;
    Some(value)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.vector.size - self.front;
    (remaining, Some(remaining))
  }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
  fn next_back(&mut self) -> Option<T> {
    if self.front == self.vector.size {
      return None;
    }

    self.vector.size -= 1;
    Some(mem::take(&mut self.vector.buffer[self.vector.size]))
  }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

impl<T: Default> IntoIterator for SimpleVector<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter {
      vector: self,
      front: 0,
    }
  }
}
