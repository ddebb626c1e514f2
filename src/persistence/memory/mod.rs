mod generic;
mod inventory;
mod log;

pub use generic::MemoryPersistence;
pub use inventory::InventoryMemoryPersistence;
pub use log::LogMemoryPersistence;
