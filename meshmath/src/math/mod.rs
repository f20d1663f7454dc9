pub mod aabb;
pub mod camera;
pub mod dot;
pub mod mat22;
pub mod mat33;
pub mod mat44;
pub mod scalar;
pub mod vec2;
pub mod vec3;
pub mod vec4;

mod approx_impls;

pub use aabb::*;
pub use camera::*;
pub use dot::*;
pub use mat22::*;
pub use mat33::*;
pub use mat44::*;
pub use scalar::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
