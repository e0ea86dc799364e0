use core::{
    mem::needs_drop,
    ptr::NonNull,
};

use crate::vec_types::Vector;

/// Element relocation primitives. Types without drop glue are relocated
/// by raw byte copies; everything else is moved slot by slot so values
/// with internal state stay coherent.
pub unsafe trait MemoryStrategy<T> {
    unsafe fn move_elements(src: NonNull<T>, dst: NonNull<T>, len: usize);
    unsafe fn insert_element(ptr: NonNull<T>, value: T, index: usize, len: usize) -> NonNull<T>;
    unsafe fn remove_element(ptr: NonNull<T>, index: usize, len: usize) -> T;
    unsafe fn remove_range_elements(ptr: NonNull<T>, first: usize, last: usize, len: usize);
    unsafe fn drop_in_place(ptr: NonNull<T>, len: usize);
}

pub unsafe trait CloneStrategy<T: Clone> {
    unsafe fn clone_elements(src: NonNull<T>, dst: NonNull<T>, len: usize);
}

unsafe impl<T, V: Vector<T>> MemoryStrategy<T> for V {

    #[inline(always)]
    unsafe fn move_elements(src: NonNull<T>, dst: NonNull<T>, len: usize) {
        if needs_drop::<T>() {
            unsafe {
                for i in 0..len {
                    dst.add(i).write(src.add(i).read())
                }
            }
        }
        else {
            unsafe {
                src.copy_to_nonoverlapping(dst, len);
            }
        }
    }

    #[inline(always)]
    unsafe fn insert_element(ptr: NonNull<T>, value: T, index: usize, len: usize) -> NonNull<T> {
        if needs_drop::<T>() {
            unsafe {
                for i in (index + 1..=len).rev() {
                    ptr.add(i).write(ptr.add(i - 1).read());
                }
                let res = ptr.add(index);
                res.write(value);
                res
            }
        }
        else {
            unsafe {
                ptr.add(index).copy_to(ptr.add(index + 1), len - index);
                let res = ptr.add(index);
                res.write(value);
                res
            }
        }
    }

    #[inline(always)]
    unsafe fn remove_element(ptr: NonNull<T>, index: usize, len: usize) -> T {
        unsafe {
            let removed = ptr.add(index).read();
            if needs_drop::<T>() {
                for i in index..len - 1 {
                    ptr.add(i).write(ptr.add(i + 1).read());
                }
            }
            else {
                ptr.add(index + 1).copy_to(ptr.add(index), len - index - 1);
            }
            removed
        }
    }

    #[inline(always)]
    unsafe fn remove_range_elements(ptr: NonNull<T>, first: usize, last: usize, len: usize) {
        unsafe {
            Self::drop_in_place(ptr.add(first), last - first);
            // copy_to is a memmove, the ranges may overlap
            ptr.add(last).copy_to(ptr.add(first), len - last);
        }
    }

    #[inline(always)]
    unsafe fn drop_in_place(ptr: NonNull<T>, len: usize) {
        if needs_drop::<T>() {
            unsafe {
                for i in 0..len {
                    ptr.add(i).drop_in_place();
                }
            }
        }
    }
}

unsafe impl<T: Clone, V: Vector<T>> CloneStrategy<T> for V {

    #[inline(always)]
    unsafe fn clone_elements(src: NonNull<T>, dst: NonNull<T>, len: usize) {
        unsafe {
            for i in 0..len {
                dst.add(i).write(src.add(i).as_ref().clone());
            }
        }
    }
}
