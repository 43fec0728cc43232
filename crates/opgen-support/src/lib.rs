//! Runtime support for operation dispatchers generated by `opgen`.
//!
//! Generated handlers return [`OperationError`] for every failure they detect.
//! The error never aborts the host; it is fatal only to the request being handled.

mod error;

pub use error::OperationError;
