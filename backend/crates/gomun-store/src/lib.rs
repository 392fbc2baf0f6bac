pub mod error;
pub mod profile_store;
pub mod seed;
pub mod user_store;

pub use error::{Result, StoreError};
pub use profile_store::ProfileStore;
pub use user_store::UserStore;
