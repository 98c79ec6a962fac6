// Command handlers module
pub mod cat;
pub mod config;
pub mod list;
pub mod status;
pub mod version;

// Re-exports for cleaner imports
pub use cat::execute as cat;
pub use config::handle_config as config;
pub use list::execute as list;
pub use status::execute as status;
pub use version::execute as version;
