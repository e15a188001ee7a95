//! Merging many independent outcomes into one.
//!
//! All entry points are single-pass scans that keep the input order. The
//! message-based combinators accept any [`FailureMessage`] source, so plain,
//! value-carrying and typed outcomes (owned or borrowed) can be mixed freely
//! by the caller. Borrowed inputs lend their messages to the join; nothing is
//! copied per element:
//!
//! ```
//! use outcome_kit::{ Outcome, ValueOutcome };
//!
//! let checks = vec![
//! 	ValueOutcome::ok( 1 ),
//! 	ValueOutcome::fail( "name is empty" ),
//! 	ValueOutcome::fail( "age is negative" ),
//! ];
//! let combined = Outcome::combine( &checks );
//! assert_eq!( combined.error(), "name is empty, age is negative" );
//!
//! let first = Outcome::first_failure_or_success( &checks );
//! assert_eq!( first.error(), "name is empty" );
//! ```

use std::fmt::Display ;
use itertools::Itertools ;
use nonempty_collections::NEVec ;

use crate::{ Outcome, TypedOutcome, ValueOutcome };



/// An outcome that can hand its failure message to a combinator.
///
/// Implemented for owned and borrowed [`Outcome`], [`ValueOutcome`] and
/// [`TypedOutcome`] (the latter when its error is [`Display`]). Borrowed
/// outcomes yield references into themselves.
pub trait FailureMessage {

	/// The rendered form of the failure.
	type Message: Display ;

	/// The failure message, or `None` when this is a success.
	fn failure_message( self ) -> Option<Self::Message> ;

}

impl FailureMessage for Outcome {
	type Message = String ;
	fn failure_message( self ) -> Option<String> { self.into_error() }
}

impl<'a> FailureMessage for &'a Outcome {
	type Message = &'a str ;
	fn failure_message( self ) -> Option<&'a str> { self.state.error().map( String::as_str ) }
}

impl<T> FailureMessage for ValueOutcome<T> {
	type Message = String ;
	fn failure_message( self ) -> Option<String> { self.inner.err() }
}

impl<'a, T> FailureMessage for &'a ValueOutcome<T> {
	type Message = &'a str ;
	fn failure_message( self ) -> Option<&'a str> { self.inner.as_ref().err().map( String::as_str ) }
}

impl<T, E: Display> FailureMessage for TypedOutcome<T, E> {
	type Message = E ;
	fn failure_message( self ) -> Option<E> { self.into_std().err() }
}

impl<'a, T, E: Display> FailureMessage for &'a TypedOutcome<T, E> {
	type Message = &'a E ;
	fn failure_message( self ) -> Option<&'a E> { self.error() }
}

impl Outcome {

	/// Separator used by [`Outcome::combine`] between failure messages.
	pub const DEFAULT_SEPARATOR: &'static str = ", ";

	/// Merges `results` into one outcome, joining failure messages with
	/// [`Outcome::DEFAULT_SEPARATOR`].
	///
	/// # Panics
	/// Panics if a typed error renders as an empty string and no other
	/// failure contributes text, since the merged failure would have no message.
	#[track_caller]
	pub fn combine<I>( results: I ) -> Self
	where
		I: IntoIterator,
		I::Item: FailureMessage,
	{
		Self::combine_with( Self::DEFAULT_SEPARATOR, results )
	}

	/// Merges `results` into one outcome.
	///
	/// Succeeds if every input succeeded. Otherwise fails with the messages of
	/// all failed inputs, in input order, joined by `separator`. Successful
	/// inputs contribute nothing to the message.
	///
	/// # Panics
	/// Panics if a typed error renders as an empty string and no other
	/// failure contributes text, since the merged failure would have no message.
	#[track_caller]
	pub fn combine_with<I>( separator: &str, results: I ) -> Self
	where
		I: IntoIterator,
		I::Item: FailureMessage,
	{
		let mut failed = false ;
		let message = results.into_iter()
			.filter_map( FailureMessage::failure_message )
			.inspect(| _ | failed = true )
			.join( separator );
		match failed {
			false => Self::ok(),
			true => Self::fail( message ),
		}
	}

	/// Returns the first failure in `results`, or success if none failed.
	///
	/// Stops scanning at the first failure; later inputs are not inspected.
	///
	/// # Panics
	/// Panics if the first failure is a typed error that renders as an empty string.
	#[track_caller]
	pub fn first_failure_or_success<I>( results: I ) -> Self
	where
		I: IntoIterator,
		I::Item: FailureMessage,
	{
		match results.into_iter().find_map( FailureMessage::failure_message ) {
			None => Self::ok(),
			Some( message ) => Self::fail( message.to_string() ),
		}
	}

}

impl<E> TypedOutcome<(), NEVec<E>> {

	/// Merges typed outcomes into one, collecting every failure's error object
	/// in input order.
	///
	/// Values of successful inputs are discarded.
	///
	/// ```
	/// use outcome_kit::TypedOutcome ;
	///
	/// let results: Vec<TypedOutcome<u8, &str>> = vec![
	/// 	TypedOutcome::fail( "a" ),
	/// 	TypedOutcome::ok( 7 ),
	/// 	TypedOutcome::fail( "b" ),
	/// ];
	/// let combined = TypedOutcome::combine_errors( results );
	/// let errors = Vec::from( combined.into_std().unwrap_err() );
	/// assert_eq!( errors, [ "a", "b" ]);
	/// ```
	pub fn combine_errors<T, I>( results: I ) -> Self
	where
		I: IntoIterator<Item = TypedOutcome<T, E>>,
	{
		let errors = results.into_iter()
			.filter_map(| result | result.into_std().err() )
			.fold( None, | errors: Option<NEVec<E>>, error | match errors {
				None => Some( NEVec::new( error )),
				Some( mut errors ) => { errors.push( error ); Some( errors ) }
			});
		match errors {
			None => Self::ok(()),
			Some( errors ) => Self::fail( errors ),
		}
	}

}
