pub mod memory;
pub mod models;
pub mod mysql;
pub mod repositories;
pub mod schema;

pub use memory::*;
pub use mysql::*;
pub use repositories::*;
