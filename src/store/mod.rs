pub mod identity;
pub mod memory;
pub mod repository;

pub use identity::{
    FileIdentityStore, Identity, IdentityStore, IdentityStoreError, MemoryIdentityStore,
    StoredIdentity,
};
pub use memory::{MemoryRepository, SeedError};
pub use repository::{PraiseRepository, StoreError};
