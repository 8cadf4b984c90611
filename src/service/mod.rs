mod memory;
mod remote;
mod r#trait;
mod wrapper;

// WalletService trait
pub use r#trait::WalletService;

// WalletService implementations
pub use memory::MemoryWalletService;
pub use remote::RemoteWalletService;
pub use wrapper::ServiceWrapper;
