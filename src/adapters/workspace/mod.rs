//! Local workspace inspection.

pub mod package_json;

pub use package_json::PackageJsonResolver;
