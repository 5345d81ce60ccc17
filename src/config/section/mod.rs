//! Configuration section definitions.

mod load;
mod server;

pub use load::{DEFAULT_DIRS, LoadConfig};
pub use server::ServerConfig;
