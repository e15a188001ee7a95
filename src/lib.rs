//! Success-or-failure values for operations that should not panic or unwind
//! to report an expected failure.
//!
//! An outcome is an immutable value that is either a success (optionally
//! carrying a value) or a failure (always carrying an error). The pairing is
//! checked once, when the outcome is built, so an ill-formed outcome such as
//! a failure without a reason can not exist.
//!
//! # Variants
//!
//! - [`Outcome`]: no value; failures carry a non-empty message.
//! - [`ValueOutcome<T>`]: a success carries a `T`; failures carry a non-empty message.
//! - [`TypedOutcome<T, E>`]: a success carries a `T`; failures carry a caller-defined `E`.
//!
//! All three implement [`Fallible`] and share the flag/error invariant through
//! [`ErrorState`].
//!
//! # Narrowing
//!
//! A richer outcome can be narrowed to a simpler one when the caller no longer
//! needs the value or the typed error. Narrowing builds a new outcome and leaves
//! the source untouched. It is always explicit: call [`ValueOutcome::to_outcome`],
//! [`TypedOutcome::to_outcome`], [`TypedOutcome::to_value_outcome`], or go through
//! the matching `From` impls with `.into()`.
//!
//! ```
//! use outcome_kit::{ Outcome, TypedOutcome, ValueOutcome };
//!
//! fn parse_port( raw: &str ) -> TypedOutcome<u16, std::num::ParseIntError> {
//! 	raw.parse::<u16>().into()
//! }
//!
//! let port: ValueOutcome<u16> = parse_port( "8080" ).to_value_outcome();
//! assert_eq!( port.value(), Some( &8080 ));
//!
//! let status: Outcome = parse_port( "eighty" ).into();
//! assert_eq!( status.error(), "invalid digit found in string" );
//! ```
//!
//! # Combination
//!
//! Independent checks can be merged into a single outcome with
//! [`Outcome::combine`] (every failure message, in order) or
//! [`Outcome::first_failure_or_success`] (only the first one):
//!
//! ```
//! use outcome_kit::Outcome ;
//!
//! let combined = Outcome::combine_with( ",", [
//! 	Outcome::fail( "a" ),
//! 	Outcome::ok(),
//! 	Outcome::fail( "b" ),
//! ]);
//! assert_eq!( combined.error(), "a,b" );
//! ```
//!
//! # Construction errors
//!
//! Breaking an invariant is a bug in the calling code, not a domain failure.
//! The checked constructors (`from_parts`, `try_ok`, `try_fail`) report it as a
//! [`ConstructionError`]; the ergonomic factories panic with the same text.
//!
//! ```
//! use outcome_kit::{ ConstructionError, Outcome, ValueOutcome, Violation };
//!
//! assert_eq!(
//! 	Outcome::try_fail( "" ),
//! 	Err( ConstructionError::InvalidConstruction( Violation::MissingErrorMessage )),
//! );
//! assert_eq!( ValueOutcome::<String>::try_ok( None ), Err( ConstructionError::ValueRequired ));
//! ```
//!
//! # Features
//!
//! - `serde`: serializes outcomes as a property bag with `IsFailure`,
//! 	`IsSuccess`, `Error` and `Value` keys, and deserializes them back through
//! 	the checked constructors.

mod construction_error ;
mod error_state ;
mod fallible ;
mod outcome ;
mod value_outcome ;
mod typed_outcome ;
mod combine ;
#[cfg( feature = "serde" )]
mod property_bag ;

pub use construction_error::{ ConstructionError, Violation };
pub use error_state::ErrorState ;
pub use fallible::Fallible ;
pub use outcome::Outcome ;
pub use value_outcome::ValueOutcome ;
pub use typed_outcome::TypedOutcome ;
pub use combine::FailureMessage ;
#[doc( no_inline )]
pub use nonempty_collections::NEVec ;
