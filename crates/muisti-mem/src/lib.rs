#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod capacity_policy;
pub mod conditional;
pub mod const_fn;
pub mod string_types;
pub mod vec_types;

mod allocator;
mod errors;
#[cfg(feature = "defmt")]
mod defmt;
#[cfg(feature = "std")]
mod global_alloc;

pub use allocator::Allocator;
pub use capacity_policy::{CapacityPolicy, Exact, Geometric};
pub use errors::CapacityError;
#[cfg(feature = "std")]
pub use global_alloc::{GLOBAL_ALLOC, GlobalAlloc};
pub use string_types::{PoolString, PoolWString, TermString, Unit};
#[cfg(feature = "std")]
pub use string_types::{GlobalString, GlobalWString};
pub use vec_types::{DynVec, ExactVec, PoolVec, Vector};
#[cfg(feature = "std")]
pub use vec_types::GlobalVec;
