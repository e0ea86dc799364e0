use core::{
    mem,
    ptr::NonNull,
};

/// Primitive byte allocator seam. Memory returned here is untyped and
/// carries no construction or destruction semantics; the containers built
/// on top of it are responsible for element lifetimes.
pub trait Allocator {

    /// Acquires `size` bytes aligned to `align`, or `None` when the request
    /// cannot be satisfied.
    ///
    /// # Safety
    ///
    /// `align` must be a power of two.
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    /// Releases a block previously returned by [`allocate_raw`](Self::allocate_raw).
    ///
    /// # Safety
    ///
    /// Must be called at most once per successful acquisition, with the same
    /// `size` and `align`, and only after every value constructed in the
    /// block has been dropped or read out.
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// Acquires raw storage for `count` values of `T`. The slots are
    /// uninitialized and must not be read as `T` before being written.
    ///
    /// # Safety
    ///
    /// Same contract as [`allocate_raw`](Self::allocate_raw).
    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.allocate_raw(size, align).map(|ptr| ptr.cast::<T>()) }
    }

    /// Releases storage acquired with [`allocate_uninit`](Self::allocate_uninit).
    ///
    /// # Safety
    ///
    /// Same contract as [`free_raw`](Self::free_raw).
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.free_raw(ptr.cast::<u8>(), size, align) }
    }
}
