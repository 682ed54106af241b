//! HTTP handlers for the batch upload, single upload, and download endpoints.

pub mod download;
pub mod upload_batch;
pub mod upload_single;
