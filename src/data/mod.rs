pub mod export;
pub mod generator;
pub mod sampler;
pub mod ticker;
