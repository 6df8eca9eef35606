//! Foundation crate for the kunai contact-sync workspace.
//!
//! Holds the pieces shared by every other crate: error types and the
//! abstract contact-store field set that the vCard mapping layer reads
//! and writes.

pub mod error;
pub mod fields;

pub use error::{CoreError, CoreResult};
pub use fields::{FieldValue, FieldValues};
