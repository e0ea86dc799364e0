use std::alloc::{alloc, dealloc, Layout};

use core::{
    mem,
    ptr::NonNull,
};

use parking_lot::Mutex;

use muisti_mem::{Allocator, const_fn::align_up};

/// Bump allocator over one fixed byte region.
///
/// Allocations advance a cursor and are never reclaimed individually;
/// `free_raw` is a no-op and the whole region is released on drop or
/// rewound with [`reset`](Self::reset). The cursor sits behind a lock so
/// the pool itself may be handed to multiple contexts, even though the
/// containers built on it stay single-writer.
pub struct FixedPool {
    data: NonNull<u8>,
    size: usize,
    cursor: Mutex<usize>,
}

unsafe impl Send for FixedPool {}
unsafe impl Sync for FixedPool {}

impl FixedPool {

    pub fn new(size: usize) -> Option<Self> {
        let layout = Layout::from_size_align(size, mem::align_of::<usize>()).ok()?;
        if layout.size() == 0 {
            return None
        }
        let ptr = unsafe { alloc(layout) };
        Some(
            Self {
                data: NonNull::new(ptr)?,
                size,
                cursor: Mutex::new(0),
            }
        )
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn used(&self) -> usize {
        *self.cursor.lock()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.size - self.used()
    }

    #[inline(always)]
    pub fn full(&self) -> bool {
        self.used() >= self.size
    }

    /// Rewinds the cursor to the start of the region.
    ///
    /// # Safety
    ///
    /// Every allocation handed out so far becomes dangling; no container
    /// may still own memory from this pool.
    pub unsafe fn reset(&mut self) {
        *self.cursor.get_mut() = 0;
    }
}

impl Allocator for FixedPool {

    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>> {
        if size == 0 {
            return None
        }
        let mut cursor = self.cursor.lock();
        let start = self.data.as_ptr() as usize + *cursor;
        let aligned_start = align_up(start, align);
        let end = aligned_start.checked_add(size)?;
        if end > self.data.as_ptr() as usize + self.size {
            return None
        }
        *cursor = end - self.data.as_ptr() as usize;
        Some(
            unsafe {
                NonNull::new_unchecked(aligned_start as *mut u8)
            }
        )
    }

    unsafe fn free_raw(&self, _ptr: NonNull<u8>, _size: usize, _align: usize) {}
}

impl Drop for FixedPool {

    fn drop(&mut self) {
        unsafe {
            let layout = Layout::from_size_align_unchecked(self.size, mem::align_of::<usize>());
            dealloc(self.data.as_ptr(), layout);
        }
    }
}
