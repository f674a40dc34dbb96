//! # rvector - A Growable Array on a Raw Owned Buffer
//!
//! This crate provides [`SimpleVector`], a dynamic array written from scratch
//! on top of [`ArrayBuffer`], a fixed-size block of slots allocated straight
//! from the C heap with `posix_memalign`. It does not wrap `Vec<T>`.
//!
//! ## Overview
//!
//! ```text
//!   SimpleVector<T>
//!   ┌──────────────────────────┐
//!   │ size:   3                │
//!   │ buffer: ArrayBuffer<T> ──┼──► ┌─────┬─────┬─────┬─────┐
//!   │           len = 4        │    │  a  │  b  │  c  │  -  │
//!   └──────────────────────────┘    └─────┴─────┴─────┴─────┘
//!                                    ◄── logical ──►  spare
//!
//!   capacity = buffer.len()        size <= capacity, always
//! ```
//!
//! When a push or insert finds the buffer full, a *growth event* happens:
//!
//! ```text
//!   1. allocate a new ArrayBuffer (every slot = T::default())
//!
//!      old ──► [ a | b | c | d ]
//!      new ──► [ _ | _ | _ | _ | _ | _ | _ | _ ]
//!
//!   2. move the live elements across
//!
//!      new ──► [ a | b | c | d | _ | _ | _ | _ ]
//!
//!   3. swap buffer ownership; the old block is released on drop
//! ```
//!
//! Capacity grows `0 → 1 → 2 → 4 → 8 → …` under repeated pushes.
//!
//! ## Crate Structure
//!
//! ```text
//!   rvector
//!   ├── align      - Alignment macros (align!, align_to!)
//!   ├── heap       - posix_memalign / free wrappers (internal)
//!   ├── buffer     - ArrayBuffer, the uniquely owned slot block
//!   ├── error      - VectorError
//!   └── vector     - SimpleVector, reserve(), svec!
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rvector::{reserve, svec, SimpleVector};
//!
//! let mut v = SimpleVector::<i32>::from(reserve(5));
//! assert_eq!(v.capacity(), 5);
//!
//! for i in 0..10 {
//!     v.push_back(i);
//! }
//! assert_eq!(v.len(), 10);
//! assert_eq!(v.capacity(), 10);
//!
//! let position = v.erase(0);
//! assert_eq!(v[position], 1);
//!
//! assert!(v.at(42).is_err());
//! assert!(svec![1, 2] < svec![1, 2, 3]);
//! ```
//!
//! ## Features
//!
//! - **Explicit capacity control**: `reserve` never shrinks, `resize` and
//!   `clear` keep the allocation
//! - **Move-only element support**: growth relocates by move, so `T` only
//!   needs `Default`
//! - **Checked and unchecked access**: `at` returns a [`VectorError`], `[]`
//!   panics past `len()`
//! - **Lexicographic ordering** over the logical elements
//!
//! ## Cargo Features
//!
//! - `trace`: print every buffer allocation (size, address, program break)
//!
//! ## Limitations
//!
//! - **Single-threaded mutation**: the type is `Send`/`Sync` when `T` is, but
//!   has no internal locking
//! - **Unix-only**: allocation goes through `libc`
//! - **Eager default-fill**: spare capacity is filled with `T::default()`, so
//!   growth requires `T: Default`

pub mod align;
mod buffer;
mod error;
mod heap;
mod vector;

pub use buffer::ArrayBuffer;
pub use error::VectorError;
pub use heap::print_alloc;
pub use vector::{IntoIter, ReserveProxy, SimpleVector, reserve};
