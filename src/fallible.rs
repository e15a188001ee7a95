/// Common inspection surface shared by every outcome variant.
///
/// Lets host code ask "did this fail?" without caring whether the outcome
/// carries a value or what its error type is.
pub trait Fallible {

	/// Returns `true` if this outcome represents a failure.
	fn is_failure( &self ) -> bool ;

	/// Returns `true` if this outcome represents a success.
	#[inline] fn is_success( &self ) -> bool { !self.is_failure() }

}
