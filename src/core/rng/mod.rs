pub mod hash_rng;


// 재수출
pub use hash_rng::HashRng;
