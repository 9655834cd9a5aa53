mod body;
mod catalog;

pub use body::{Body, BodyID, BodyKind};
pub use catalog::{BodyRecord, Catalog};
