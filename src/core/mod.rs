//! Host-facing seams
//!
//! This module contains:
//! - The backend collaborator trait and the file/channel backend
//! - Response types reported back to the host process

pub mod backend;
pub mod response;
