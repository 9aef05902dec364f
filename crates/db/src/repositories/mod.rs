//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod device_configuration_repo;

pub use device_configuration_repo::DeviceConfigurationRepo;
