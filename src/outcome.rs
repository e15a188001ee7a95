use crate::{ ConstructionError, ErrorState, Fallible };



/// The success or failure of an operation that produces no value.
///
/// A failure always carries a non-empty error message; a success carries
/// nothing. Construct with [`Outcome::ok`] or [`Outcome::fail`].
///
/// ```
/// use outcome_kit::Outcome ;
///
/// let outcome = Outcome::fail( "disk full" );
/// assert!( outcome.is_failure() );
/// assert_eq!( outcome.error(), "disk full" );
/// assert_eq!( Outcome::ok().error(), "" );
/// ```
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct Outcome {
	pub(crate) state: ErrorState<String>,
}

impl Outcome {

	/// The shared success value.
	pub const OK: Outcome = Outcome { state: ErrorState::Success };

	/// A successful outcome.
	#[inline] pub const fn ok() -> Self { Self::OK }

	/// A failed outcome with the given message.
	///
	/// # Panics
	/// Panics if `error` is empty, since a failure without a reason is a bug
	/// at the call site. Use [`Outcome::try_fail`] to check instead.
	#[track_caller]
	pub fn fail( error: impl Into<String> ) -> Self {
		match Self::try_fail( error ) {
			Ok( outcome ) => outcome,
			Err( err ) => panic!( "{}", err ),
		}
	}

	/// A failed outcome with the given message.
	///
	/// # Errors
	/// Returns [`ConstructionError::InvalidConstruction`] if `error` is empty.
	pub fn try_fail( error: impl Into<String> ) -> Result<Self, ConstructionError> {
		Self::from_parts( true, Some( error.into() ))
	}

	/// Builds an outcome from a raw flag and optional message.
	///
	/// # Errors
	/// Returns [`ConstructionError::InvalidConstruction`] if the flag and the
	/// message disagree (see [`ErrorState::from_message`]).
	pub fn from_parts( is_failure: bool, error: Option<String> ) -> Result<Self, ConstructionError> {
		Ok( Self { state: ErrorState::from_message( is_failure, error )? })
	}

	#[inline] pub const fn is_failure( &self ) -> bool { self.state.is_failure() }
	#[inline] pub const fn is_success( &self ) -> bool { self.state.is_success() }

	/// The error message, or `""` when successful.
	#[inline] pub fn error( &self ) -> &str { self.state.message() }

	/// Consumes the outcome, returning the message if it failed.
	#[inline] pub fn into_error( self ) -> Option<String> { self.state.into_error() }

	/// Decomposes into `( is_success, is_failure )`.
	#[inline] pub const fn flags( &self ) -> ( bool, bool ) {
		( self.is_success(), self.is_failure() )
	}

	/// Decomposes into `( is_success, is_failure, error )`, the error being
	/// present only on failure.
	#[inline] pub fn flags_with_error( &self ) -> ( bool, bool, Option<&str> ) {
		( self.is_success(), self.is_failure(), self.state.error().map( String::as_str ))
	}

}

impl Default for Outcome {
	fn default() -> Self { Self::OK }
}

impl Fallible for Outcome {
	#[inline] fn is_failure( &self ) -> bool { self.state.is_failure() }
}
