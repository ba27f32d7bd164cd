pub mod signature;

pub use signature::{FunctionSignature, GoType, Parameter, ResultField};
