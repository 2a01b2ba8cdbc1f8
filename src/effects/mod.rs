//! Post-processing applied to finished sample buffers.

mod echo;

pub use echo::apply_echo;
