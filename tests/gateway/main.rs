//! CRUD gateway integration tests.

#[cfg(feature = "gateway")]
mod support;

#[cfg(feature = "gateway")]
mod http;

#[cfg(feature = "gateway")]
mod remote_sync;
