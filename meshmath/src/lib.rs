pub mod math;
pub mod mesh;
