mod loader;

pub use loader::Loader;
