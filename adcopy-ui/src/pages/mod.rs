mod home;

pub use home::{GenerateAdsFn, HomePage};
