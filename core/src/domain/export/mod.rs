pub mod entities;
pub mod layout;
pub mod metrics;
pub mod ports;
pub mod services;

pub use entities::*;
pub use ports::*;
