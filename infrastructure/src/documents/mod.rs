//! Document access on the local file system

mod local;

pub use local::LocalDocumentSource;
