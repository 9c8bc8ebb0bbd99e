//! NEO catalog: build, persist, query

pub mod builder;
pub mod query;
pub mod sample;
pub mod store;

pub use builder::NeoCatalogBuilder;
pub use query::{CatalogQueryService, NeoSummary};
pub use sample::{SAMPLE_API_URL, SAMPLE_SOURCE_NAME};
pub use store::{CatalogHandle, CatalogStore};
