use std::fmt::Display ;
use pipe_trait::Pipe ;

use crate::{ ConstructionError, ErrorState, Fallible, Outcome, ValueOutcome };



/// The success or failure of an operation that produces a `T`, failing with a
/// caller-defined error type `E` rather than a message.
///
/// Unlike [`ValueOutcome`], the value of a success is not checked: `T` may
/// itself be an `Option` when an empty success is meaningful.
///
/// Narrowing to the message-based variants stringifies the error through its
/// [`Display`] impl:
///
/// ```
/// use outcome_kit::{ Outcome, TypedOutcome, ValueOutcome };
///
/// #[derive( Debug )]
/// struct Timeout { after_ms: u32 }
///
/// impl std::fmt::Display for Timeout {
/// 	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
/// 		write!( f, "timed out after {}ms", self.after_ms )
/// 	}
/// }
///
/// let typed: TypedOutcome<u32, Timeout> = TypedOutcome::fail( Timeout { after_ms: 250 });
/// assert_eq!( typed.to_outcome().error(), "timed out after 250ms" );
///
/// let narrowed: ValueOutcome<u32> = typed.to_value_outcome();
/// assert_eq!( narrowed.error(), "timed out after 250ms" );
/// ```
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct TypedOutcome<T, E> {
	inner: Result<T, E>,
}

impl<T, E> TypedOutcome<T, E> {

	/// A successful outcome holding `value`.
	#[inline] pub const fn ok( value: T ) -> Self { Self { inner: Ok( value )}}

	/// A failed outcome holding `error`.
	#[inline] pub const fn fail( error: E ) -> Self { Self { inner: Err( error )}}

	/// Builds an outcome from a raw flag, value and error object.
	///
	/// A value passed alongside a failure is discarded.
	///
	/// # Errors
	/// - [`ConstructionError::InvalidConstruction`] if the flag and the error object disagree.
	/// - [`ConstructionError::ValueRequired`] if a success has no value.
	pub fn from_parts( is_failure: bool, value: Option<T>, error: Option<E> ) -> Result<Self, ConstructionError> {
		match ErrorState::new( is_failure, error )? {
			ErrorState::Success => value.map( Self::ok ).ok_or( ConstructionError::ValueRequired ),
			ErrorState::Failure( error ) => Ok( Self::fail( error )),
		}
	}

	#[inline] pub const fn is_failure( &self ) -> bool { self.inner.is_err() }
	#[inline] pub const fn is_success( &self ) -> bool { self.inner.is_ok() }

	/// The error object, or `None` when successful.
	#[inline] pub const fn error( &self ) -> Option<&E> { match &self.inner {
		Err( error ) => Some( error ),
		Ok( _ ) => None,
	}}

	/// The value, or `None` when failed.
	#[inline] pub const fn value( &self ) -> Option<&T> { match &self.inner {
		Ok( value ) => Some( value ),
		Err( _ ) => None,
	}}

	/// Consumes the outcome, returning the value or `T::default()` when failed.
	pub fn into_value_or_default( self ) -> T
	where
		T: Default,
	{
		self.inner.unwrap_or_default()
	}

	/// Decomposes into `( is_success, is_failure )`.
	#[inline] pub const fn flags( &self ) -> ( bool, bool ) {
		( self.is_success(), self.is_failure() )
	}

	/// Decomposes into `( is_success, is_failure, value )`.
	#[inline] pub const fn flags_with_value( &self ) -> ( bool, bool, Option<&T> ) {
		( self.is_success(), self.is_failure(), self.value() )
	}

	/// Decomposes into `( is_success, is_failure, value, error )`.
	#[inline] pub const fn flags_with_value_and_error( &self ) -> ( bool, bool, Option<&T>, Option<&E> ) {
		( self.is_success(), self.is_failure(), self.value(), self.error() )
	}

	/// Narrows to an [`Outcome`], dropping the value and stringifying the error.
	///
	/// # Panics
	/// Panics if the error renders as an empty string, which no failure may carry.
	#[track_caller]
	pub fn to_outcome( &self ) -> Outcome
	where
		E: Display,
	{
		match &self.inner {
			Ok( _ ) => Outcome::ok(),
			Err( error ) => error.to_string().pipe( Outcome::fail ),
		}
	}

	/// Narrows to a [`ValueOutcome`], passing the value through and
	/// stringifying the error.
	///
	/// # Panics
	/// Panics if the error renders as an empty string, which no failure may carry.
	#[track_caller]
	pub fn to_value_outcome( self ) -> ValueOutcome<T>
	where
		E: Display,
	{
		match self.inner {
			Ok( value ) => ValueOutcome::ok( value ),
			Err( error ) => error.to_string().pipe( ValueOutcome::fail ),
		}
	}

	/// Converts into a standard [`Result`].
	#[inline] pub fn into_std( self ) -> Result<T, E> { self.inner }

}

impl<T, E> Fallible for TypedOutcome<T, E> {
	#[inline] fn is_failure( &self ) -> bool { self.inner.is_err() }
}

impl<T, E> From<Result<T, E>> for TypedOutcome<T, E> {
	fn from( inner: Result<T, E> ) -> Self { Self { inner }}
}

impl<T, E: Display> From<TypedOutcome<T, E>> for Outcome {
	#[track_caller]
	fn from( outcome: TypedOutcome<T, E> ) -> Self { outcome.to_outcome() }
}

impl<T, E: Display> From<&TypedOutcome<T, E>> for Outcome {
	#[track_caller]
	fn from( outcome: &TypedOutcome<T, E> ) -> Self { outcome.to_outcome() }
}

impl<T, E: Display> From<TypedOutcome<T, E>> for ValueOutcome<T> {
	#[track_caller]
	fn from( outcome: TypedOutcome<T, E> ) -> Self { outcome.to_value_outcome() }
}
