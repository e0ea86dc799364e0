mod fixed_pool;

pub use fixed_pool::FixedPool;
