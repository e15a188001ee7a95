//! The success/failure flag together with its error payload.
//!
//! Every outcome variant is built through an [`ErrorState`]: it is the only
//! place the "a failure carries an error, a success carries none" invariant
//! is checked. [`Outcome`]( crate::Outcome ) stores one directly, the value
//! carrying variants fold it together with their value.

use crate::{ ConstructionError, Fallible, Violation };



/// Failure flag plus error payload, checked once at construction.
///
/// Modelled as a tagged variant, so a success with an error (or a failure
/// without one) is structurally unrepresentable past the constructors.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum ErrorState<E> {
	/// No error.
	Success,
	/// Failed with the given error payload.
	Failure( E ),
}

impl<E> ErrorState<E> {

	/// Builds a state from a flag and an optional error object.
	///
	/// # Errors
	/// - [`Violation::MissingErrorObject`] when `is_failure` is set and `error` is `None`.
	/// - [`Violation::UnexpectedErrorObject`] when `is_failure` is clear and `error` is `Some`.
	pub fn new( is_failure: bool, error: Option<E> ) -> Result<Self, ConstructionError> {
		match ( is_failure, error ) {
			( true, Some( error )) => Ok( Self::Failure( error )),
			( true, None ) => Err( Violation::MissingErrorObject.into() ),
			( false, Some( _ )) => Err( Violation::UnexpectedErrorObject.into() ),
			( false, None ) => Ok( Self::Success ),
		}
	}

	/// A success state.
	#[inline] pub const fn succeeded() -> Self { Self::Success }

	/// A failure state holding `error`.
	#[inline] pub const fn failed( error: E ) -> Self { Self::Failure( error ) }

	#[inline] pub const fn is_failure( &self ) -> bool { matches!( self, Self::Failure( _ )) }
	#[inline] pub const fn is_success( &self ) -> bool { !self.is_failure() }

	/// The error payload, or `None` when this is a success.
	#[inline] pub const fn error( &self ) -> Option<&E> { match self {
		Self::Failure( error ) => Some( error ),
		Self::Success => None,
	}}

	/// Consumes the state, returning the error payload if it failed.
	#[inline] pub fn into_error( self ) -> Option<E> { match self {
		Self::Failure( error ) => Some( error ),
		Self::Success => None,
	}}

}

impl ErrorState<String> {

	/// Builds a state from a flag and an optional error message.
	///
	/// An empty message is treated exactly like a missing one.
	///
	/// # Errors
	/// - [`Violation::MissingErrorMessage`] when `is_failure` is set and the message is `None` or empty.
	/// - [`Violation::UnexpectedErrorMessage`] when `is_failure` is clear and a message is supplied.
	pub fn from_message( is_failure: bool, error: Option<String> ) -> Result<Self, ConstructionError> {
		match ( is_failure, error ) {
			( true, Some( error )) if !error.is_empty() => Ok( Self::Failure( error )),
			( true, _ ) => Err( Violation::MissingErrorMessage.into() ),
			( false, Some( _ )) => Err( Violation::UnexpectedErrorMessage.into() ),
			( false, None ) => Ok( Self::Success ),
		}
	}

	/// The error message, or `""` when this is a success.
	#[inline] pub fn message( &self ) -> &str {
		self.error().map_or( "", String::as_str )
	}

}

impl<E> Fallible for ErrorState<E> {
	#[inline] fn is_failure( &self ) -> bool { ErrorState::is_failure( self ) }
}
