// ============================================================================
// File: src/lib.rs
// ----------------------------------------------------------------------------
// mysql-ramdisk: manage the birth, life, and death of a MySQL ramdisk.
//
// Provisions a volatile, memory-backed disk volume via the macOS disk
// utilities, optionally bootstraps a MySQL instance with its data directory
// on the mount, and tears both down again. Everything is a fixed, sequential
// orchestration of external commands driven by a small settings file.
// ============================================================================

// Module declarations
pub mod config;
pub mod error;
pub mod mysql;
pub mod ramdisk;
pub mod runner;

// Re-export public API
pub use config::Settings;
pub use error::{ControlError, Result};
pub use runner::CommandRunner;
