use core::{
    cmp::Ordering,
    fmt,
    ops::{Deref, Index, IndexMut},
    slice,
};

use crate::{
    allocator::Allocator,
    capacity_policy::{CapacityPolicy, Exact},
    conditional::{Conditional, False},
    errors::CapacityError,
    vec_types::{PoolVec, Vector},
};

#[cfg(feature = "std")]
use crate::{
    conditional::True,
    global_alloc::GlobalAlloc,
    vec_types::GlobalVec,
};

use super::Unit;

use CapacityError::{IndexOutOfBounds, InvalidReservation};

/// Terminated string over fixed width character units.
///
/// Wraps one [`PoolVec`] sized `len() + 1`: the slot at index `len()`
/// always holds [`Unit::NUL`], re-established after every mutating call,
/// so [`as_ptr`](Self::as_ptr) can be handed to null-terminated character
/// APIs at any time. All positions are 0-based: index 0 is the first
/// character, `front`, `back`, `Index` and iteration all agree with
/// `len()`.
pub struct TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{
    units: PoolVec<'alloc, U, Alloc, CapacityPol, IsGlobal>,
}

/// Narrow (8-bit unit) pool string.
pub type PoolString<'alloc, Alloc> = TermString<'alloc, u8, Alloc, Exact, False>;

/// Wide (16-bit unit) pool string.
pub type PoolWString<'alloc, Alloc> = TermString<'alloc, u16, Alloc, Exact, False>;

#[cfg(feature = "std")]
pub type GlobalString = TermString<'static, u8, GlobalAlloc, Exact, True>;

#[cfg(feature = "std")]
pub type GlobalWString = TermString<'static, u16, GlobalAlloc, Exact, True>;

/// # Safety
///
/// `ptr` must point to a sequence of `U` terminated by [`Unit::NUL`]
/// within the allocation it points into.
unsafe fn terminated_len<U: Unit>(ptr: *const U) -> usize {
    let mut len = 0;
    while !unsafe { ptr.add(len).read() }.is_nul() {
        len += 1;
    }
    len
}

impl<'alloc, U, Alloc, CapacityPol> TermString<'alloc, U, Alloc, CapacityPol, False>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
{

    /// Creates an empty string holding only the terminator.
    pub fn new(alloc: &'alloc Alloc) -> Result<Self, CapacityError> {
        let mut units = PoolVec::<U, Alloc, CapacityPol, False>::new(alloc);
        units.resize(1, U::NUL)?;
        Ok(Self { units })
    }

    /// Creates a string of `len` zero-filled character slots, the
    /// resize-constructor of the underlying contract.
    pub fn with_len(len: usize, alloc: &'alloc Alloc) -> Result<Self, CapacityError> {
        let mut string = Self::new(alloc)?;
        string.resize(len)?;
        Ok(string)
    }

    /// Builds a string from `units`, taking content up to the first
    /// terminator in the slice, or the whole slice when it holds none.
    pub fn from_units(units: &[U], alloc: &'alloc Alloc) -> Result<Self, CapacityError> {
        let mut string = Self::new(alloc)?;
        string.set_units(units)?;
        Ok(string)
    }

    /// Builds a string from a raw terminated sequence.
    ///
    /// # Safety
    ///
    /// `ptr` must be terminated by a zero unit within the allocation it
    /// points into; the scan for it is unbounded.
    pub unsafe fn from_ptr(ptr: *const U, alloc: &'alloc Alloc) -> Result<Self, CapacityError> {
        let len = unsafe { terminated_len(ptr) };
        Self::from_units(unsafe { slice::from_raw_parts(ptr, len) }, alloc)
    }
}

#[cfg(feature = "std")]
impl<U: Unit> TermString<'static, U, GlobalAlloc, Exact, True> {

    pub fn new() -> Result<Self, CapacityError> {
        let mut units = GlobalVec::new();
        units.resize(1, U::NUL)?;
        Ok(Self { units })
    }

    pub fn with_len(len: usize) -> Result<Self, CapacityError> {
        let mut string = Self::new()?;
        string.resize(len)?;
        Ok(string)
    }

    pub fn from_units(units: &[U]) -> Result<Self, CapacityError> {
        let mut string = Self::new()?;
        string.set_units(units)?;
        Ok(string)
    }

    /// # Safety
    ///
    /// Same contract as [`TermString::from_ptr`].
    pub unsafe fn from_ptr(ptr: *const U) -> Result<Self, CapacityError> {
        let len = unsafe { terminated_len(ptr) };
        Self::from_units(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

#[cfg(feature = "std")]
impl GlobalString {

    pub fn from_str(s: &str) -> Result<Self, CapacityError> {
        Self::from_units(s.as_bytes())
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    /// Character count, terminator excluded.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character slots available without growth, terminator slot excluded.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.units.capacity() - 1
    }

    #[inline(always)]
    pub fn max_size(&self) -> usize {
        self.units.max_size() - 1
    }

    /// Pointer to the terminated buffer, valid for `len() + 1` units.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const U {
        self.units.as_ptr()
    }

    /// Content without the terminator.
    #[inline(always)]
    pub fn as_units(&self) -> &[U] {
        &self.units.as_slice()[..self.units.len() - 1]
    }

    /// Content including the terminator, for interop round trips.
    #[inline(always)]
    pub fn as_units_with_nul(&self) -> &[U] {
        self.units.as_slice()
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, U> {
        self.as_units().iter()
    }

    pub fn at(&self, index: usize) -> Result<&U, CapacityError> {
        if index >= self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() })
        }
        Ok(&self.units[index])
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut U, CapacityError> {
        if index >= self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() })
        }
        Ok(&mut self.units[index])
    }

    #[inline(always)]
    pub fn front(&self) -> Option<&U> {
        self.as_units().first()
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&U> {
        self.as_units().last()
    }

    #[inline(always)]
    fn write_terminator(&mut self) {
        let len = self.len();
        self.units[len] = U::NUL;
    }

    fn slots(&self, count: usize) -> Result<usize, CapacityError> {
        count
            .checked_add(1)
            .ok_or(InvalidReservation { current: self.capacity(), requested: count })
    }

    /// Lexicographic comparison by the first differing unit; an exhausted
    /// side orders before a longer one.
    pub fn compare<A2, P2, G2>(&self, other: &TermString<'_, U, A2, P2, G2>) -> Ordering
        where
            A2: Allocator,
            P2: CapacityPolicy,
            G2: Conditional,
    {
        let lhs = self.as_units_with_nul();
        let rhs = other.as_units_with_nul();
        let mut i = 0;
        while !lhs[i].is_nul() && lhs[i] == rhs[i] {
            i += 1;
        }
        lhs[i].cmp(&rhs[i])
    }

    pub fn find<A2, P2, G2>(&self, needle: &TermString<'_, U, A2, P2, G2>, pos: usize) -> Option<usize>
        where
            A2: Allocator,
            P2: CapacityPolicy,
            G2: Conditional,
    {
        self.find_units(needle.as_units(), pos)
    }

    /// First index at or past `pos` where `needle` occurs. An empty needle
    /// never matches.
    pub fn find_units(&self, needle: &[U], pos: usize) -> Option<usize> {
        if needle.is_empty() {
            return None
        }
        let haystack = self.as_units();
        (pos..haystack.len()).find(|&i| haystack[i..].starts_with(needle))
    }

    /// First index at or past `pos` holding `value`. The zero unit is
    /// reserved for the terminator and never matches.
    pub fn find_unit(&self, value: U, pos: usize) -> Option<usize> {
        if value.is_nul() {
            return None
        }
        let haystack = self.as_units();
        (pos..haystack.len()).find(|&i| haystack[i] == value)
    }

    /// Replaces the contents with `count` copies of `value`.
    pub fn assign(&mut self, count: usize, value: U) -> Result<(), CapacityError> {
        let slots = self.slots(count)?;
        self.units.assign(slots, value)?;
        self.write_terminator();
        Ok(())
    }

    /// Replaces the contents from `units`, up to its first terminator.
    pub fn set_units(&mut self, units: &[U]) -> Result<(), CapacityError> {
        let len = units
            .iter()
            .position(|u| u.is_nul())
            .unwrap_or(units.len());
        self.resize(len)?;
        unsafe {
            self.units.as_mut_ptr().copy_from_nonoverlapping(units.as_ptr(), len);
        }
        self.write_terminator();
        Ok(())
    }

    pub fn resize(&mut self, count: usize) -> Result<(), CapacityError> {
        let slots = self.slots(count)?;
        self.units.resize(slots, U::NUL)?;
        self.write_terminator();
        Ok(())
    }

    pub fn reserve(&mut self, count: usize) -> Result<(), CapacityError> {
        let slots = self.slots(count)?;
        self.units.reserve(slots)
    }

    pub fn shrink_to_fit(&mut self) -> Result<(), CapacityError> {
        self.units.shrink_to_fit()
    }

    pub fn clear(&mut self) {
        // shrinking to one slot never reallocates
        let _ = self.units.resize(1, U::NUL);
        self.write_terminator();
    }

    /// Appends one unit. The terminator is rolled back in place when
    /// growth fails, leaving the string untouched.
    pub fn push(&mut self, value: U) -> Result<(), CapacityError> {
        debug_assert!(!value.is_nul(), "pushing a terminator unit");
        let len = self.len();
        self.units[len] = value;
        match self.units.push(U::NUL) {
            Ok(_) => Ok(()),
            Err(e) => {
                self.units[len] = U::NUL;
                Err(e)
            },
        }
    }

    pub fn pop(&mut self) -> Option<U> {
        if self.is_empty() {
            return None
        }
        let terminator = self.units.pop();
        debug_assert!(matches!(terminator, Some(u) if u.is_nul()));
        let last = self.units.len() - 1;
        let value = self.units[last];
        self.units[last] = U::NUL;
        Some(value)
    }

    /// Panics when `index > len()`.
    pub fn insert(&mut self, value: U, index: usize) -> Result<(), CapacityError> {
        if index > self.len() {
            panic!("index {} was out of bounds with len {} when inserting", index, self.len())
        }
        debug_assert!(!value.is_nul(), "inserting a terminator unit");
        self.units.insert(value, index)?;
        self.write_terminator();
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<U> {
        if index >= self.len() {
            return None
        }
        let removed = self.units.remove(index);
        self.write_terminator();
        removed
    }

    /// Removes `[first, last)`. No-op when `first == last`; panics on an
    /// invalid range.
    pub fn remove_range(&mut self, first: usize, last: usize) {
        if first == last {
            return
        }
        if first > last || last > self.len() {
            panic!("range {}..{} was out of bounds with len {} when removing", first, last, self.len())
        }
        self.units.remove_range(first, last);
        self.write_terminator();
    }

    pub fn try_clone(&self) -> Result<Self, CapacityError> {
        Ok(Self { units: self.units.try_clone()? })
    }
}

impl<'alloc, Alloc, CapacityPol, IsGlobal> TermString<'alloc, u8, Alloc, CapacityPol, IsGlobal>
    where
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    pub fn to_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_units())
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> Index<usize> for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Output = U;

    #[inline(always)]
    fn index(&self, index: usize) -> &U {
        if index >= self.len() {
            panic!("index {} out of bounds for length {}", index, self.len())
        }
        &self.units[index]
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> IndexMut<usize> for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut U {
        if index >= self.len() {
            panic!("index {} out of bounds for length {}", index, self.len())
        }
        &mut self.units[index]
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> Deref for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    type Target = [U];

    #[inline(always)]
    fn deref(&self) -> &[U] {
        self.as_units()
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> AsRef<[U]> for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    #[inline(always)]
    fn as_ref(&self) -> &[U] {
        self.as_units()
    }
}

impl<'a, 'b, U, A1, A2, P1, P2, G1, G2> PartialEq<TermString<'b, U, A2, P2, G2>> for TermString<'a, U, A1, P1, G1>
    where
        U: Unit,
        A1: Allocator,
        A2: Allocator,
        P1: CapacityPolicy,
        P2: CapacityPolicy,
        G1: Conditional,
        G2: Conditional,
{

    fn eq(&self, other: &TermString<'b, U, A2, P2, G2>) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> Eq for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{}

impl<'a, 'b, U, A1, A2, P1, P2, G1, G2> PartialOrd<TermString<'b, U, A2, P2, G2>> for TermString<'a, U, A1, P1, G1>
    where
        U: Unit,
        A1: Allocator,
        A2: Allocator,
        P1: CapacityPolicy,
        P2: CapacityPolicy,
        G1: Conditional,
        G2: Conditional,
{

    fn partial_cmp(&self, other: &TermString<'b, U, A2, P2, G2>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> Ord for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> fmt::Debug for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit + fmt::Debug,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_units()).finish()
    }
}
