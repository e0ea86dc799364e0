/// Decides how much storage a growing container actually acquires.
///
/// `grow` returns the capacity to allocate for a request of `required`
/// slots, or `None` when the request is not a growth at all.
pub trait CapacityPolicy {
    fn grow(current: usize, required: usize) -> Option<usize>;
}

/// Allocates exactly what was asked for.
///
/// Capacities reported back to callers are bit for bit the requested
/// counts, at the cost of quadratic time for element-at-a-time growth.
pub struct Exact {}

impl CapacityPolicy for Exact {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(required) }
    }
}

/// Rounds requests up to the next power of two, amortizing repeated
/// one-slot growth to linear time. Capacity beyond `capacity >= len`
/// is implementation defined under this policy.
pub struct Geometric {}

impl CapacityPolicy for Geometric {

    #[inline]
    fn grow(current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { required.max(2).checked_next_power_of_two() }
    }
}
