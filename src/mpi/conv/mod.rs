//! Import and export of MPI values
//!
//! Two wire forms are supported:
//! - raw big-endian octet strings, the form used by key material and
//!   protocol fields
//! - positional ASCII in any radix from 2 to 16, with a leading `-` for
//!   negatives, the form used by test vectors and human-facing tooling
//!
//! Both directions round-trip exactly: importing what was exported
//! reproduces the value, for every radix and every non-negative binary
//! string.

mod bytes;
mod radix;
