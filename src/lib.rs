pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{connect, connect_privileged, StoreHandle};
pub use crate::config::StoreConfig;
pub use crate::core::{seeder::Seeder, store::DataAccess};
pub use crate::domain::model::{Query, Record, SortDirection};
pub use crate::domain::ports::StoreClient;
pub use crate::utils::error::{Result, StoreError};
