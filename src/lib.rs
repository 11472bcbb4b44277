//! Release resolution for the Frame download page.
//!
//! Fetches the latest published release from the GitHub API, classifies its
//! installer assets by filename, detects the visiting client's OS and CPU
//! architecture from browser-supplied hints, and selects the best-matching
//! installer to offer. Every failure path degrades to "nothing to offer"
//! rather than an error; the page falls back to a generic download link.

pub mod platform;
pub mod release;
pub mod resolver;
pub mod source;
