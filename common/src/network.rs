pub mod port;
pub mod protocol;
pub mod range;
pub mod services;
