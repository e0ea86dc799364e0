use core::{
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
};

use crate::errors::CapacityError;

/// Contract shared by the pool backed vectors.
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are raw
/// storage and are never read or dropped. Fallible operations leave the
/// container untouched on error: a capacity change either commits as a
/// whole or does not happen.
pub trait Vector<T>:
    Sized +
    Index<usize, Output = T> +
    IndexMut<usize, Output = T> +
    AsRef<[T]> +
    Deref<Target = [T]> +
    DerefMut
{

    type Iter<'a>: Iterator<Item = &'a T>
        where T: 'a, Self: 'a;

    type IterMut<'a>: Iterator<Item = &'a mut T>
        where T: 'a, Self: 'a;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest element count addressable without overflowing the byte
    /// size computation.
    fn max_size(&self) -> usize;

    fn as_ptr(&self) -> *const T;

    fn as_mut_ptr(&mut self) -> *mut T;

    fn as_non_null(&self) -> NonNull<T>;

    fn as_slice(&self) -> &[T];

    fn as_mut_slice(&mut self) -> &mut [T];

    /// # Safety
    ///
    /// Slots `[0, len)` must hold live values afterwards; values beyond the
    /// new length are leaked, not dropped.
    unsafe fn set_len(&mut self, len: usize);

    /// Checked element access; the panicking counterpart is `Index`.
    fn at(&self, index: usize) -> Result<&T, CapacityError>;

    fn at_mut(&mut self, index: usize) -> Result<&mut T, CapacityError>;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    /// Ensures room for at least `capacity` elements. How much is actually
    /// acquired is up to the capacity policy; never shrinks.
    fn reserve(&mut self, capacity: usize) -> Result<(), CapacityError>;

    fn resize(&mut self, len: usize, value: T) -> Result<(), CapacityError>
        where
            T: Clone;

    fn resize_with<F>(&mut self, len: usize, f: F) -> Result<(), CapacityError>
        where
            F: FnMut() -> T;

    /// Replaces the contents with `count` copies of `value`.
    fn assign(&mut self, count: usize, value: T) -> Result<(), CapacityError>
        where
            T: Clone;

    fn push(&mut self, value: T) -> Result<&mut T, CapacityError>;

    fn pop(&mut self) -> Option<T>;

    /// Panics when `index > len`.
    fn insert(&mut self, value: T, index: usize) -> Result<&mut T, CapacityError>;

    fn remove(&mut self, index: usize) -> Option<T>;

    /// Removes `[first, last)`, compacting the tail left. No-op when
    /// `first == last`; panics on an invalid range.
    fn remove_range(&mut self, first: usize, last: usize);

    /// Drops every element. Capacity is never reduced; storage is released
    /// by `shrink_to_fit` or on drop.
    fn clear(&mut self);

    /// Reallocates to exactly `len` slots, releasing the buffer entirely
    /// when empty.
    fn shrink_to_fit(&mut self) -> Result<(), CapacityError>;

    /// Deep copy sized to the source's capacity, not merely its length.
    fn clone_from<V>(&mut self, from: &V) -> Result<(), CapacityError>
        where
            T: Clone,
            V: Vector<T>;

    /// Ownership transfer: leaves `from` empty.
    fn move_from<V>(&mut self, from: &mut V) -> Result<(), CapacityError>
        where
            V: Vector<T>;

    fn contains(&self, value: &T) -> bool
        where
            T: PartialEq;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}
