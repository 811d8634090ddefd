//! # Outcome: Present, Empty, or Failed
//!
//! A small algebra for computations that can produce a value, legitimately produce
//! nothing, or fail while trying.
//!
//! ## Core Type
//!
//! - **[`Outcome<T>`]**: `Present(T)`, `Empty`, or `Failed(ErrorInfo)`
//! - **[`ErrorInfo`]**: a captured failure, a message plus an optional cause
//!
//! ## Key Features
//!
//! - **Composable**: Chain steps with `.map()` and `.bind()`
//! - **Total**: Combinators never unwind; a panic in a closure becomes `Failed`
//! - **Exhaustive**: Consume with `.fold()` (or a plain `match`), handling all three cases
//!
//! ## Example
//!
//! ```
//! use outcome::prelude::*;
//!
//! fn first_pet(pets: &[&'static str]) -> Outcome<&'static str> {
//!     pets.first().copied().into()
//! }
//!
//! let line = first_pet(&["rex"])
//!     .map(str::to_uppercase)
//!     .fold(|name| format!("pet: {name}"), || "no pets".into(), |e| format!("error: {e}"));
//! assert_eq!(line, "pet: REX");
//!
//! let risky: Outcome<i32> = from_throwing(|| "x".parse::<i32>().unwrap());
//! assert!(risky.is_failed());
//! ```
//!
//! ## Common Functions
//!
//! **Building Outcomes:**
//! - [`present(v)`] / [`empty()`] / [`failed(e)`] - Direct constructors
//! - [`from_throwing(f)`] - Capture a panicking computation
//! - [`from_fallible(f)`] - Capture a `Result`-returning computation
//!
//! **Composition:**
//! - [`func::compose`], [`func::kleisli`], [`func::fork`] - Plain function combinators
//! - [`iter::OutcomeIterExt`] - Iterator adapters; `collect()` into `Outcome<C>`
//! - [`sample::pick`] - Random selection with an injected generator
//!
//! [`present(v)`]: present
//! [`empty()`]: empty
//! [`failed(e)`]: failed
//! [`from_throwing(f)`]: from_throwing
//! [`from_fallible(f)`]: from_fallible

mod capture;
mod error;
pub mod func;
pub mod iter;
mod outcome;
pub mod prelude;
pub mod sample;


pub use capture::*;
pub use error::*;
pub use outcome::*;
