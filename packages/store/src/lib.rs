pub mod clock;
pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::KeyValueStore;
pub use session::{AdminSession, ADMIN_KEY_STORAGE_KEY, EXPIRES_AT_STORAGE_KEY};
