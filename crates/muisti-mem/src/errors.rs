use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    AllocFailed {
        new_capacity: usize,
    },
    InvalidReservation {
        current: usize,
        requested: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    ZeroSizedElement,
}

impl fmt::Display for CapacityError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "failed to allocate storage for {} elements", new_capacity)
            },
            Self::InvalidReservation { current, requested } => {
                write!(f, "invalid reservation of {} elements with current capacity {}", requested, current)
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            },
            Self::ZeroSizedElement => {
                write!(f, "zero sized elements cannot be pool allocated")
            },
        }
    }
}

impl core::error::Error for CapacityError {}
