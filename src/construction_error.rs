use thiserror::Error ;



/// Raised when an outcome is built from inputs that break its invariants.
///
/// These are programmer errors, not domain failures: a domain failure is the
/// payload an outcome carries, while a `ConstructionError` means the outcome
/// itself could never have existed. The checked constructors return it; the
/// ergonomic factories panic with its text.
#[derive( Error, Debug, Clone, Copy, PartialEq, Eq )]
pub enum ConstructionError {
	/// The failure/success flag and the error payload disagree.
	#[error( "Invalid Construction: {0}" )] InvalidConstruction( #[from] Violation ),
	/// A success was requested without the value it must carry.
	#[error( "Value Required: a success result must carry a value" )] ValueRequired,
}

/// The way a flag/error pair broke the outcome invariant.
#[derive( Error, Debug, Clone, Copy, PartialEq, Eq )]
pub enum Violation {
	/// Failure requested with a missing or empty error message.
	#[error( "There must be error message for failure." )] MissingErrorMessage,
	/// Success requested alongside an error message.
	#[error( "There should be no error message for success." )] UnexpectedErrorMessage,
	/// Failure requested without an error object.
	#[error( "You have tried to create a failure result, but error object appeared to be null, please review the code, generating error object." )]
	MissingErrorObject,
	/// Success requested alongside an error object.
	#[error( "You have tried to create a success result, but error object was also passed to the constructor, please try to review the code, creating a success result." )]
	UnexpectedErrorObject,
}
