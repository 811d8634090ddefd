//! Commonly used imports
//!
//! Use `use outcome::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{ErrorInfo, Outcome};

// Constructors
pub use crate::outcome::{empty, failed, present};

// Boundary adapters
pub use crate::capture::{from_fallible, from_throwing};

// Iteration
pub use crate::iter::OutcomeIterExt;
