pub mod seeder;
pub mod store;

pub use crate::domain::model::{Query, Record, SortDirection};
pub use crate::domain::ports::StoreClient;
pub use crate::utils::error::Result;
