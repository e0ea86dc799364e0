use core::cmp::Ordering;

use muisti_alloc::FixedPool;
use muisti_mem::{CapacityError, ExactVec, PoolString, PoolWString, Vector};

fn pool() -> FixedPool {
    FixedPool::new(64 * 1024).unwrap()
}

fn wide<'a>(pool: &'a FixedPool, s: &str) -> PoolWString<'a, FixedPool> {
    let mut out = PoolWString::new(pool).unwrap();
    for u in s.encode_utf16() {
        out.push(u).unwrap();
    }
    out
}

#[test]
fn vector_default_constructor() {
    let pool = pool();
    let vec = ExactVec::<u32, _>::new(&pool);
    assert!(vec.is_empty());
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
    assert_eq!(pool.used(), 0);
}

#[test]
fn vector_resize_constructor() {
    let pool = pool();
    let vec = ExactVec::with_len(5, 0u32, &pool).unwrap();
    assert!(!vec.is_empty());
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.capacity(), 5);
}

#[test]
fn vector_push_back() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    vec.push(5u32).unwrap();
    assert!(!vec.is_empty());
    assert_eq!(vec.len(), 1);
    assert!(vec.capacity() >= 1);
    assert_eq!(vec.front(), Some(&5));
    assert_eq!(unsafe { *vec.as_ptr() }, 5);
}

#[test]
fn vector_clear_keeps_capacity() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    vec.push(5u32).unwrap();
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.len(), 0);
    assert!(vec.capacity() >= 1);
}

#[test]
fn vector_with_capacity_preallocates() {
    let pool = pool();
    let vec = ExactVec::<u32, _>::with_capacity(8, &pool).unwrap();
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 8);
    assert_eq!(pool.used(), 32);
}

#[test]
fn vector_reserve_and_resize() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    vec.reserve(10).unwrap();
    vec.resize(5, 0u32).unwrap();
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.capacity(), 10);
    vec.resize(10, 0).unwrap();
    vec.resize(5, 0).unwrap();
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn vector_assign() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    vec.assign(10, 5u32).unwrap();
    for &v in &vec {
        assert_eq!(v, 5);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn vector_continuous_memory() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    for i in 0..100u32 {
        vec.push(i).unwrap();
    }
    for i in 0..100usize {
        assert_eq!(vec[i], i as u32);
        assert_eq!(unsafe { *vec.as_ptr().add(i) }, i as u32);
    }
}

#[test]
fn vector_shrink_to_fit() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    vec.reserve(10).unwrap();
    vec.resize(5, 7u32).unwrap();
    vec.shrink_to_fit().unwrap();
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.capacity(), 5);
    assert!(vec.iter().all(|&v| v == 7));
    vec.clear();
    vec.shrink_to_fit().unwrap();
    assert_eq!(vec.len(), 0);
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn vector_remove_shifts_tail() {
    let pool = pool();
    let mut vec = ExactVec::new(&pool);
    for i in 0..6u32 {
        vec.push(i).unwrap();
    }
    assert_eq!(vec.remove(1), Some(1));
    assert_eq!(vec.as_slice(), &[0, 2, 3, 4, 5]);
    vec.remove_range(1, 3);
    assert_eq!(vec.as_slice(), &[0, 4, 5]);
}

#[test]
fn exhausted_pool_fails_growth_atomically() {
    let pool = FixedPool::new(64).unwrap();
    let mut vec = ExactVec::new(&pool);
    vec.assign(8, 7u64).unwrap();

    let err = vec.reserve(1024).unwrap_err();
    assert_eq!(err, CapacityError::AllocFailed { new_capacity: 1024 });
    // the failed growth must not have touched the container
    assert_eq!(vec.len(), 8);
    assert_eq!(vec.capacity(), 8);
    assert!(vec.iter().all(|&v| v == 7));
}

#[test]
fn exhausted_pool_fails_string_push_atomically() {
    let pool = FixedPool::new(16).unwrap();
    let mut s = PoolString::new(&pool).unwrap();
    while s.push(b'x').is_ok() {}

    let len = s.len();
    assert!(len > 0);
    assert_eq!(s.as_units_with_nul()[len], 0);
    assert!(s.as_units().iter().all(|&u| u == b'x'));
}

#[test]
fn string_default_constructor() {
    let pool = pool();
    let s = PoolString::new(&pool).unwrap();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.capacity(), 0);
}

#[test]
fn string_resize_constructor() {
    let pool = pool();
    let s = PoolString::with_len(5, &pool).unwrap();
    assert!(!s.is_empty());
    assert_eq!(s.len(), 5);
    assert_eq!(s.capacity(), 5);
}

#[test]
fn string_correct_size() {
    let pool = pool();
    let s = PoolString::from_units(b"hello", &pool).unwrap();
    assert!(!s.is_empty());
    assert_eq!(s.len(), 5);
    assert_eq!(s.capacity(), 5);
    assert_eq!(s.len(), unsafe { libc_strlen(s.as_ptr()) });

    let mut t = PoolString::new(&pool).unwrap();
    t.set_units(b"hello").unwrap();
    assert_eq!(t.len(), 5);
    assert_eq!(t.capacity(), 5);
}

// strlen over the terminated contract, to check interop the way the
// consumer of as_ptr would
unsafe fn libc_strlen(mut ptr: *const u8) -> usize {
    let mut len = 0;
    unsafe {
        while ptr.read() != 0 {
            ptr = ptr.add(1);
            len += 1;
        }
    }
    len
}

#[test]
fn string_compare() {
    let pool = pool();
    let abc = PoolString::from_units(b"abc", &pool).unwrap();
    let abc2 = PoolString::from_units(b"abc", &pool).unwrap();
    let abcd = PoolString::from_units(b"abcd", &pool).unwrap();
    let bbcd = PoolString::from_units(b"bbcd", &pool).unwrap();
    let bbc = PoolString::from_units(b"bbc", &pool).unwrap();

    assert_eq!(abc.compare(&abc2), Ordering::Equal);
    assert_eq!(abc.compare(&abcd), Ordering::Less);
    assert_eq!(abcd.compare(&abc), Ordering::Greater);
    assert_eq!(bbcd.compare(&abc), Ordering::Greater);
    assert_eq!(bbc.compare(&abcd), Ordering::Greater);
}

#[test]
fn string_find() {
    let pool = pool();

    let empty = PoolString::new(&pool).unwrap();
    assert_eq!(empty.find(&empty, 0), None);
    assert_eq!(empty.find_units(b"a", 0), None);
    assert_eq!(empty.find_unit(b'a', 0), None);

    let abc = PoolString::from_units(b"abc", &pool).unwrap();
    assert_eq!(abc.find_units(b"", 0), None);
    assert_eq!(abc.find_units(b"a", 0), Some(0));
    assert_eq!(abc.find_unit(b'a', 0), Some(0));
    assert_eq!(abc.find_units(b"b", 0), Some(1));
    assert_eq!(abc.find_unit(b'b', 0), Some(1));
    assert_eq!(abc.find_units(b"c", 0), Some(2));
    assert_eq!(abc.find_unit(b'c', 0), Some(2));
    assert_eq!(abc.find_units(b"abc", 0), Some(0));
    assert_eq!(abc.find_units(b"bc", 0), Some(1));

    let abcd = PoolString::from_units(b"abcd", &pool).unwrap();
    assert_eq!(abcd.find(&abc, 0), Some(0));
    assert_eq!(abc.find(&abcd, 0), None);

    let abcdef = PoolString::from_units(b"abcdef", &pool).unwrap();
    assert_eq!(abcdef.find(&abc, 0), Some(0));
    assert_eq!(abcdef.find(&abc, 1), None);
}

#[test]
fn string_round_trip_through_terminated_contract() {
    let pool = pool();
    let original = PoolString::from_units(b"round trip", &pool).unwrap();
    let copy = unsafe { PoolString::from_ptr(original.as_ptr(), &pool) }.unwrap();
    assert_eq!(copy, original);
    assert_eq!(copy.as_units_with_nul(), original.as_units_with_nul());
}

#[test]
fn wstring_behaves_like_string() {
    let pool = pool();

    let s = wide(&pool, "hello");
    assert_eq!(s.len(), 5);
    assert_eq!(s.as_units_with_nul()[5], 0);

    let abc = wide(&pool, "abc");
    let abcd = wide(&pool, "abcd");
    assert_eq!(abc.compare(&abcd), Ordering::Less);
    assert_eq!(abcd.compare(&abc), Ordering::Greater);
    assert_eq!(abc.compare(&wide(&pool, "abc")), Ordering::Equal);

    assert_eq!(abcd.find(&abc, 0), Some(0));
    assert_eq!(abc.find(&abcd, 0), None);
    assert_eq!(s.find(&wide(&pool, ""), 0), None);

    let copy = unsafe { PoolWString::from_ptr(s.as_ptr(), &pool) }.unwrap();
    assert_eq!(copy, s);
}

#[test]
fn wstring_resize_constructor() {
    let pool = pool();
    let s = PoolWString::with_len(5, &pool).unwrap();
    assert!(!s.is_empty());
    assert_eq!(s.len(), 5);
    assert_eq!(s.capacity(), 5);
}
