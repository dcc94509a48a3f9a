//! Verify-email page for the 66 Days Prep marketing site.
//!
//! Verifies an email address via the token embedded in a verification link,
//! then offers a deep-link handoff into the companion mobile application
//! with an App Store fallback when the app is not installed.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Deep-link handoff to the companion application
pub mod handoff;

/// Page orchestration
pub mod page;

/// Three-way UI state
pub mod state;

/// Token extraction from the inbound link
pub mod token;

/// Environment configuration
pub mod types;

/// Verification service client
pub mod verifier;

/// State rendering
pub mod view;
