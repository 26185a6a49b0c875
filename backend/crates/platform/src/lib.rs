//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random secrets, key fingerprints)
//! - Credential codec (Argon2id + server pepper)
//! - Session token codec (HS256 JWT, stateless)
//! - Bearer token extraction from request headers

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
