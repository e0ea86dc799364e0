use core::{
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr::NonNull,
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_policy::{CapacityPolicy, Exact, Geometric},
    conditional::{Conditional, False},
    errors::CapacityError,
};

#[cfg(feature = "std")]
use crate::{
    conditional::True,
    global_alloc::{GLOBAL_ALLOC, GlobalAlloc},
};

use super::{
    CloneStrategy,
    Iter,
    IterMut,
    MemoryStrategy,
    Vector,
};

use CapacityError::{AllocFailed, IndexOutOfBounds, InvalidReservation, ZeroSizedElement};

/// Growable vector over one contiguous buffer acquired from a pool
/// allocator. Element lifetimes are managed explicitly: live values occupy
/// `[0, len)`, the rest of the buffer stays raw.
pub struct PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{
    data: NonNull<T>,
    capacity: usize,
    len: usize,
    alloc: &'alloc Alloc,
    _markers: PhantomData<(CapacityPol, IsGlobal)>,
}

/// Vector with the exact growth policy of the source contract: `reserve(n)`
/// acquires exactly `n` slots.
pub type ExactVec<'alloc, T, Alloc> = PoolVec<'alloc, T, Alloc, Exact, False>;

/// Vector with geometric growth; capacities beyond `capacity >= len` are
/// implementation defined.
pub type DynVec<'alloc, T, Alloc> = PoolVec<'alloc, T, Alloc, Geometric, False>;

#[cfg(feature = "std")]
pub type GlobalVec<T> = PoolVec<'static, T, GlobalAlloc, Exact, True>;

impl<'alloc, T, Alloc, CapacityPol> PoolVec<'alloc, T, Alloc, CapacityPol, False>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    /// Creates an empty vector. No memory is acquired until first growth.
    pub fn new(alloc: &'alloc Alloc) -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc,
            _markers: PhantomData,
        }
    }

    pub fn with_capacity(
        capacity: usize,
        alloc: &'alloc Alloc,
    ) -> Result<Self, CapacityError> {
        let mut vec = Self::new(alloc);
        vec.reserve(capacity)?;
        Ok(vec)
    }

    pub fn with_len(
        len: usize,
        value: T,
        alloc: &'alloc Alloc,
    ) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        let mut vec = Self::new(alloc);
        vec.resize(len, value)?;
        Ok(vec)
    }
}

#[cfg(feature = "std")]
impl<T> GlobalVec<T> {

    pub fn new() -> Self {
        Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc: &GLOBAL_ALLOC,
            _markers: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        let mut vec = Self::new();
        vec.reserve(capacity)?;
        Ok(vec)
    }

    pub fn with_len(len: usize, value: T) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        let mut vec = Self::new();
        vec.resize(len, value)?;
        Ok(vec)
    }
}

#[cfg(feature = "std")]
impl<T> Default for GlobalVec<T> {

    fn default() -> Self {
        Self::new()
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    /// Deep copy through the same allocator, sized to this vector's
    /// capacity.
    pub fn try_clone(&self) -> Result<Self, CapacityError>
        where
            T: Clone
    {
        let mut vec = Self {
            data: NonNull::dangling(),
            capacity: 0,
            len: 0,
            alloc: self.alloc,
            _markers: PhantomData,
        };
        Vector::clone_from(&mut vec, self)?;
        Ok(vec)
    }

    /// Releases the buffer. Callers drop or read out every element first.
    fn release(&mut self) {
        debug_assert!(self.len == 0);
        if self.capacity != 0 {
            unsafe { self.alloc.free_uninit(self.data, self.capacity); }
            self.data = NonNull::dangling();
            self.capacity = 0;
        }
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> Vector<T> for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Iter<'a> = Iter<'a, T>
        where T: 'a, Self: 'a;

    type IterMut<'a> = IterMut<'a, T>
        where T: 'a, Self: 'a;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn max_size(&self) -> usize {
        if size_of::<T>() == 0 {
            usize::MAX
        }
        else {
            usize::MAX / size_of::<T>()
        }
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_ptr()
    }

    #[inline(always)]
    fn as_non_null(&self) -> NonNull<T> {
        self.data
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.data.as_ptr(), self.len) }
    }

    #[inline(always)]
    unsafe fn set_len(&mut self, len: usize) {
        if len > self.capacity { panic!("len was larger than capacity") }
        self.len = len;
    }

    #[inline(always)]
    fn at(&self, index: usize) -> Result<&T, CapacityError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_ref() })
    }

    #[inline(always)]
    fn at_mut(&mut self, index: usize) -> Result<&mut T, CapacityError> {
        if index >= self.len {
            return Err(IndexOutOfBounds { index, len: self.len })
        }
        Ok(unsafe { self.data.add(index).as_mut() })
    }

    #[inline(always)]
    fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.data.as_ref() })
        }
    }

    #[inline(always)]
    fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.data.as_mut() })
        }
    }

    #[inline(always)]
    fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.data.add(self.len - 1).as_ref() })
        }
    }

    #[inline(always)]
    fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        }
        else {
            Some(unsafe { self.data.add(self.len - 1).as_mut() })
        }
    }

    fn reserve(&mut self, capacity: usize) -> Result<(), CapacityError> {
        if capacity <= self.capacity {
            return Ok(())
        }
        if capacity > self.max_size() {
            return Err(InvalidReservation { current: self.capacity, requested: capacity })
        }
        // the policy may round past the addressable bound
        let new_capacity = match CapacityPol::grow(self.capacity, capacity) {
            Some(r) => r.min(self.max_size()),
            None => return Err(InvalidReservation { current: self.capacity, requested: capacity }),
        };
        let tmp = match unsafe { self.alloc.allocate_uninit(new_capacity) } {
            Some(r) => r,
            None => return Err(
                if size_of::<T>() == 0 {
                    ZeroSizedElement
                }
                else {
                    AllocFailed { new_capacity }
                }
            ),
        };
        debug_assert!(self.len <= self.capacity);
        // commit only once the new buffer holds every element
        unsafe {
            Self::move_elements(self.data, tmp, self.len);
        }
        if self.capacity != 0 {
            unsafe { self.alloc.free_uninit(self.data, self.capacity); }
        }
        self.data = tmp;
        self.capacity = new_capacity;
        Ok(())
    }

    fn resize(&mut self, len: usize, value: T) -> Result<(), CapacityError>
        where
            T: Clone
    {
        if len > self.capacity {
            self.reserve(len)?
        }
        if len > self.len {
            for i in self.len..len {
                unsafe { self.data.add(i).write(value.clone()) }
            }
        }
        else if len < self.len {
            unsafe {
                Self::drop_in_place(self.data.add(len), self.len - len);
            }
        }
        self.len = len;
        Ok(())
    }

    fn resize_with<F>(&mut self, len: usize, mut f: F) -> Result<(), CapacityError>
        where
            F: FnMut() -> T
    {
        if len > self.capacity {
            self.reserve(len)?
        }
        if len > self.len {
            for i in self.len..len {
                unsafe { self.data.add(i).write(f()) }
            }
        }
        else if len < self.len {
            unsafe {
                Self::drop_in_place(self.data.add(len), self.len - len);
            }
        }
        self.len = len;
        Ok(())
    }

    fn assign(&mut self, count: usize, value: T) -> Result<(), CapacityError>
        where
            T: Clone
    {
        self.clear();
        self.reserve(count)?;
        for i in 0..count {
            unsafe { self.data.add(i).write(value.clone()) }
        }
        self.len = count;
        Ok(())
    }

    #[inline(always)]
    fn push(&mut self, value: T) -> Result<&mut T, CapacityError> {
        if self.len == self.capacity {
            self.reserve(self.len + 1)?
        }
        let mut ptr = unsafe { self.data.add(self.len) };
        unsafe { ptr.write(value) };
        self.len += 1;
        Ok(unsafe { ptr.as_mut() })
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        if self.len == 0 { return None }
        self.len -= 1;
        Some(unsafe { self.data.add(self.len).read() })
    }

    fn insert(&mut self, value: T, index: usize) -> Result<&mut T, CapacityError> {
        if index > self.len {
            panic!("index {} was out of bounds with len {} when inserting", index, self.len)
        }
        if self.len == self.capacity {
            self.reserve(self.len + 1)?
        }
        unsafe {
            let mut ptr = Self::insert_element(self.data, value, index, self.len);
            self.len += 1;
            Ok(ptr.as_mut())
        }
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len { return None }
        let removed = unsafe { Self::remove_element(self.data, index, self.len) };
        self.len -= 1;
        Some(removed)
    }

    fn remove_range(&mut self, first: usize, last: usize) {
        if first == last { return }
        if first > last || last > self.len {
            panic!("range {}..{} was out of bounds with len {} when removing", first, last, self.len)
        }
        unsafe {
            Self::remove_range_elements(self.data, first, last, self.len);
        }
        self.len -= last - first;
    }

    fn clear(&mut self) {
        debug_assert!(self.len <= self.capacity);
        unsafe {
            Self::drop_in_place(self.data, self.len);
        }
        self.len = 0;
    }

    fn shrink_to_fit(&mut self) -> Result<(), CapacityError> {
        if self.len == self.capacity {
            return Ok(())
        }
        if self.len == 0 {
            self.release();
            return Ok(())
        }
        let tmp = match unsafe { self.alloc.allocate_uninit(self.len) } {
            Some(r) => r,
            None => return Err(AllocFailed { new_capacity: self.len }),
        };
        unsafe {
            Self::move_elements(self.data, tmp, self.len);
            self.alloc.free_uninit(self.data, self.capacity);
        }
        self.data = tmp;
        self.capacity = self.len;
        Ok(())
    }

    fn clone_from<V>(&mut self, from: &V) -> Result<(), CapacityError>
        where
            T: Clone,
            V: Vector<T>,
    {
        self.clear();
        self.release();
        self.reserve(from.capacity())?;
        unsafe { V::clone_elements(from.as_non_null(), self.data, from.len()); }
        self.len = from.len();
        Ok(())
    }

    fn move_from<V>(&mut self, from: &mut V) -> Result<(), CapacityError>
        where
            V: Vector<T>,
    {
        self.clear();
        if self.capacity < from.len() {
            self.release();
            self.reserve(from.len())?
        }
        unsafe { V::move_elements(from.as_non_null(), self.data, from.len()); }
        self.len = from.len();
        unsafe { from.set_len(0); }
        Ok(())
    }

    fn contains(&self, value: &T) -> bool
        where
            T: PartialEq
    {
        for i in 0..self.len {
            if unsafe { self.data.add(i).as_ref() == value } {
                return true
            }
        }
        false
    }

    #[inline(always)]
    fn iter(&self) -> Iter<'_, T> {
        unsafe {
            let ptr = self.data;
            let end = self.data.add(self.len);
            Iter::new(ptr, end)
        }
    }

    #[inline(always)]
    fn iter_mut(&mut self) -> IterMut<'_, T> {
        unsafe {
            let ptr = self.data;
            let end = self.data.add(self.len);
            IterMut::new(ptr, end)
        }
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> Drop for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> Index<usize> for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_ref() }
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> IndexMut<usize> for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        if index >= self.len {
            panic!("index {} out of bounds for length {}", index, self.len)
        }
        unsafe { self.data.add(index).as_mut() }
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> AsRef<[T]> for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> AsMut<[T]> for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> Deref for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> DerefMut for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'vec, 'alloc, T, Alloc, CapacityPol, IsGlobal> IntoIterator for &'vec PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Item = &'vec T;
    type IntoIter = Iter<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'vec, 'alloc, T, Alloc, CapacityPol, IsGlobal> IntoIterator for &'vec mut PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Item = &'vec mut T;
    type IntoIter = IterMut<'vec, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> fmt::Debug for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        T: fmt::Debug,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, 'b, T, A1, A2, P1, P2, G1, G2> PartialEq<PoolVec<'b, T, A2, P2, G2>> for PoolVec<'a, T, A1, P1, G1>
    where
        T: PartialEq,
        A1: Allocator,
        A2: Allocator,
        P1: CapacityPolicy,
        P2: CapacityPolicy,
        G1: Conditional,
        G2: Conditional,
{

    fn eq(&self, other: &PoolVec<'b, T, A2, P2, G2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
