use defmt::Formatter;

use crate::{
    allocator::Allocator,
    capacity_policy::CapacityPolicy,
    conditional::Conditional,
    errors::CapacityError,
    string_types::{TermString, Unit},
    vec_types::{PoolVec, Vector},
};

impl<'alloc, T, Alloc, CapacityPol, IsGlobal> defmt::Format for PoolVec<'alloc, T, Alloc, CapacityPol, IsGlobal>
    where
        T: defmt::Format,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.as_slice())
    }
}

impl<'alloc, U, Alloc, CapacityPol, IsGlobal> defmt::Format for TermString<'alloc, U, Alloc, CapacityPol, IsGlobal>
    where
        U: Unit + defmt::Format,
        Alloc: Allocator,
        CapacityPol: CapacityPolicy,
        IsGlobal: Conditional,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.as_units())
    }
}

impl defmt::Format for CapacityError {
    fn format(&self, fmt: Formatter<'_>) {
        match *self {
            Self::AllocFailed { new_capacity } => {
                defmt::write!(fmt, "failed to allocate storage for {=usize} elements", new_capacity)
            },
            Self::InvalidReservation { current, requested } => {
                defmt::write!(fmt, "invalid reservation of {=usize} elements with current capacity {=usize}", requested, current)
            },
            Self::IndexOutOfBounds { index, len } => {
                defmt::write!(fmt, "index {=usize} out of bounds for length {=usize}", index, len)
            },
            Self::ZeroSizedElement => {
                defmt::write!(fmt, "zero sized elements cannot be pool allocated")
            },
        }
    }
}
