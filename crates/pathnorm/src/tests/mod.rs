mod normalize;
mod transform;
