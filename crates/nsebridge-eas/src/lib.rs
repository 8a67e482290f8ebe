//! nsebridge-eas - EAS managed-credentials configuration assembly
//!
//! EAS builds provision signing credentials and entitlements for the app
//! and its extensions from the `extra.eas.build.experimental.ios.
//! appExtensions` list in the app config. This crate computes the NSE entry
//! for that list and merges it into an existing `extra` document.

mod credentials;

pub use credentials::managed_credentials_extra;
