pub const PROJECT_NAME: &str = "copy_images";

pub mod copier;
pub mod coordinator;
pub mod document;
pub mod error;
pub mod reporter;
pub mod resolver;
pub mod search_path;
pub mod settings;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
