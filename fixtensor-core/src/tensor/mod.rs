pub mod concretetensor;
pub mod lazytensor;

pub use concretetensor::Tensor;
pub use lazytensor::LazyTensor;
