/// Sum of component-wise products, implemented by every vector type.
pub trait Dot {
    fn dot(self, rhs: Self) -> f32;
}

pub fn dot<V: Dot>(v1: V, v2: V) -> f32 {
    v1.dot(v2)
}

// Same thing as `dot` for the fixed-size real vectors here.
pub fn inner_product<V: Dot>(v1: V, v2: V) -> f32 {
    v1.dot(v2)
}
