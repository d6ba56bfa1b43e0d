//! Services Layer
//!
//! Business logic sitting between the record-source providers and the
//! presentation in the binary.

pub mod report_service;
