pub mod data;
pub mod util;

#[cfg(feature = "remote")]
pub mod http;
