//! Helper functions used to simplify unit tests.
//!
//! **Note**: This module is only compiled and used during testing.
