use outcome_kit::{ ConstructionError, Fallible, Outcome, Violation };

#[test]
fn outcome_ok() {

	let outcome = Outcome::ok();

	assert!( outcome.is_success() );
	assert!( !outcome.is_failure() );
	assert_eq!( outcome.error(), "" );
	assert_eq!( outcome.into_error(), None );

}

#[test]
fn outcome_ok_is_equivalent_to_shared_success() {

	assert_eq!( Outcome::ok(), Outcome::OK );
	assert_eq!( Outcome::ok(), Outcome::default() );

}

#[test]
fn outcome_fail() {

	let outcome = Outcome::fail( "disk full" );

	assert!( outcome.is_failure() );
	assert!( !outcome.is_success() );
	assert_eq!( outcome.error(), "disk full" );

}

#[test]
fn outcome_try_fail_rejects_empty_message() {
	assert_construction_error!(
		Outcome::try_fail( "" ),
		ConstructionError::InvalidConstruction( Violation::MissingErrorMessage )
	);
}

#[test]
#[should_panic( expected = "There must be error message for failure." )]
fn outcome_fail_panics_on_empty_message() {
	let _ = Outcome::fail( String::new() );
}

#[test]
fn outcome_from_parts() {

	assert_eq!( Outcome::from_parts( false, None ), Ok( Outcome::ok() ));
	assert_eq!( Outcome::from_parts( true, Some( "x".into() )), Ok( Outcome::fail( "x" )));
	assert_construction_error!(
		Outcome::from_parts( true, None ),
		ConstructionError::InvalidConstruction( Violation::MissingErrorMessage )
	);
	assert_construction_error!(
		Outcome::from_parts( false, Some( "x".into() )),
		ConstructionError::InvalidConstruction( Violation::UnexpectedErrorMessage )
	);

}

#[test]
fn outcome_flags() {

	assert_eq!( Outcome::ok().flags(), ( true, false ));
	assert_eq!( Outcome::ok().flags_with_error(), ( true, false, None ));

	let failed = Outcome::fail( "nope" );
	assert_eq!( failed.flags(), ( false, true ));
	assert_eq!( failed.flags_with_error(), ( false, true, Some( "nope" )));

}

#[test]
fn outcome_is_fallible() {

	let outcome: &dyn Fallible = &Outcome::fail( "nope" );
	assert!( outcome.is_failure() );
	assert!( !outcome.is_success() );

}
