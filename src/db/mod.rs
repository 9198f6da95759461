pub mod moods;
mod pool;

pub use pool::create_pool;
