use crate::{ ConstructionError, ErrorState, Fallible, Outcome };



/// The success or failure of an operation that produces a `T`.
///
/// A success always holds a value; a failure holds a non-empty error message
/// and no value. Reading the value of a failure is not an error: [`value`]
/// returns `None` and [`into_value_or_default`] returns `T::default()`.
///
/// ```
/// use outcome_kit::ValueOutcome ;
///
/// let parsed: ValueOutcome<u16> = ValueOutcome::ok( 8080 );
/// assert_eq!( parsed.value(), Some( &8080 ));
///
/// let missing: ValueOutcome<u16> = ValueOutcome::fail( "port not set" );
/// assert_eq!( missing.error(), "port not set" );
/// assert_eq!( missing.into_value_or_default(), 0 );
/// ```
///
/// [`value`]: ValueOutcome::value
/// [`into_value_or_default`]: ValueOutcome::into_value_or_default
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct ValueOutcome<T> {
	pub(crate) inner: Result<T, String>,
}

impl<T> ValueOutcome<T> {

	/// A successful outcome holding `value`.
	///
	/// `value` is taken as is: a `ValueOutcome<Option<U>>` built with
	/// `ok( None )` is a success. The required-value check applies only to the
	/// `Option`-taking checked paths, [`ValueOutcome::try_ok`] and
	/// [`ValueOutcome::from_parts`].
	#[inline] pub const fn ok( value: T ) -> Self { Self { inner: Ok( value )}}

	/// A successful outcome holding `value`, which must be present.
	///
	/// # Errors
	/// Returns [`ConstructionError::ValueRequired`] if `value` is `None`.
	pub fn try_ok( value: Option<T> ) -> Result<Self, ConstructionError> {
		value.map( Self::ok ).ok_or( ConstructionError::ValueRequired )
	}

	/// A failed outcome with the given message.
	///
	/// # Panics
	/// Panics if `error` is empty. Use [`ValueOutcome::try_fail`] to check instead.
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
		Self::from_parts( true, None, Some( error.into() ))
	}

	/// Builds an outcome from a raw flag, value and message.
	///
	/// A value passed alongside a failure is discarded.
	///
	/// # Errors
	/// - [`ConstructionError::InvalidConstruction`] if the flag and the message disagree.
	/// - [`ConstructionError::ValueRequired`] if a success has no value.
	pub fn from_parts( is_failure: bool, value: Option<T>, error: Option<String> ) -> Result<Self, ConstructionError> {
		match ErrorState::from_message( is_failure, error )? {
			ErrorState::Success => Self::try_ok( value ),
			ErrorState::Failure( error ) => Ok( Self { inner: Err( error )}),
		}
	}

	#[inline] pub const fn is_failure( &self ) -> bool { self.inner.is_err() }
	#[inline] pub const fn is_success( &self ) -> bool { self.inner.is_ok() }

	/// The error message, or `""` when successful.
	#[inline] pub fn error( &self ) -> &str { match &self.inner {
		Err( error ) => error,
		Ok( _ ) => "",
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

	/// Decomposes into `( is_success, is_failure, value, error )`, each payload
	/// present only in its own state.
	#[inline] pub fn flags_with_value_and_error( &self ) -> ( bool, bool, Option<&T>, Option<&str> ) {
		( self.is_success(), self.is_failure(), self.value(), self.inner.as_ref().err().map( String::as_str ))
	}

	/// Narrows to an [`Outcome`], dropping the value and keeping flag and message.
	pub fn to_outcome( &self ) -> Outcome {
		Outcome { state: match &self.inner {
			Ok( _ ) => ErrorState::Success,
			Err( error ) => ErrorState::Failure( error.clone() ),
		}}
	}

	/// Converts into a standard [`Result`], the message becoming the `Err` payload.
	#[inline] pub fn into_std( self ) -> Result<T, String> { self.inner }

}

impl<T> Fallible for ValueOutcome<T> {
	#[inline] fn is_failure( &self ) -> bool { self.inner.is_err() }
}

impl<T> From<ValueOutcome<T>> for Outcome {
	fn from( outcome: ValueOutcome<T> ) -> Self {
		Outcome { state: outcome.inner.err().map_or( ErrorState::Success, ErrorState::Failure )}
	}
}

impl<T> From<&ValueOutcome<T>> for Outcome {
	fn from( outcome: &ValueOutcome<T> ) -> Self { outcome.to_outcome() }
}

/// Panics if the `Err` message is empty, like [`ValueOutcome::fail`].
impl<T> From<Result<T, String>> for ValueOutcome<T> {
	#[track_caller]
	fn from( result: Result<T, String> ) -> Self { match result {
		Ok( value ) => Self::ok( value ),
		Err( error ) => Self::fail( error ),
	}}
}
