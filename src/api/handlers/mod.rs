pub mod device;
pub mod estimation;
pub mod settings;
