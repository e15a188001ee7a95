use outcome_kit::{ ConstructionError, TypedOutcome, Violation };

use crate::ValidationError ;

#[test]
fn typed_outcome_ok() {

	let outcome = TypedOutcome::<u32, ValidationError>::ok( 9 );

	assert!( outcome.is_success() );
	assert_eq!( outcome.value(), Some( &9 ));
	assert_eq!( outcome.error(), None );

}

#[test]
fn typed_outcome_ok_accepts_empty_optional_value() {

	let outcome = TypedOutcome::<Option<u32>, ValidationError>::ok( None );

	assert!( outcome.is_success() );
	assert_eq!( outcome.value(), Some( &None ));

}

#[test]
fn typed_outcome_fail() {

	let error = ValidationError::new( "email", "missing @" );
	let outcome = TypedOutcome::<u32, _>::fail( error.clone() );

	assert!( outcome.is_failure() );
	assert_eq!( outcome.error(), Some( &error ));
	assert_eq!( outcome.value(), None );
	assert_eq!( outcome.into_value_or_default(), 0 );

}

#[test]
fn typed_outcome_from_parts() {

	assert_construction_error!(
		TypedOutcome::<u32, ValidationError>::from_parts( true, None, None ),
		ConstructionError::InvalidConstruction( Violation::MissingErrorObject )
	);
	assert_construction_error!(
		TypedOutcome::from_parts( false, Some( 1_u32 ), Some( ValidationError::new( "a", "b" ))),
		ConstructionError::InvalidConstruction( Violation::UnexpectedErrorObject )
	);
	assert_construction_error!(
		TypedOutcome::<u32, ValidationError>::from_parts( false, None, None ),
		ConstructionError::ValueRequired
	);

	// object errors are not checked for emptiness
	let failed = TypedOutcome::<u32, String>::from_parts( true, None, Some( String::new() )).expect( "valid failure" );
	assert_eq!( failed.error(), Some( &String::new() ));

}

#[test]
fn typed_outcome_flags() {

	let error = ValidationError::new( "age", "negative" );
	let failed = TypedOutcome::<i8, _>::fail( error.clone() );

	assert_eq!( failed.flags(), ( false, true ));
	assert_eq!( failed.flags_with_value(), ( false, true, None ));
	assert_eq!( failed.flags_with_value_and_error(), ( false, true, None, Some( &error )));

}
