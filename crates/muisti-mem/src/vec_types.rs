mod iter;
mod pool_vec;
mod strategies;
mod vector;

pub use iter::{Iter, IterMut};
pub use pool_vec::{ExactVec, DynVec, PoolVec};
#[cfg(feature = "std")]
pub use pool_vec::GlobalVec;
pub use strategies::{CloneStrategy, MemoryStrategy};
pub use vector::Vector;
