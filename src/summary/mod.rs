mod describe;

pub use describe::{derive_capabilities, describe};
