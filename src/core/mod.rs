pub mod approach;
pub mod sampler;
pub mod window;
