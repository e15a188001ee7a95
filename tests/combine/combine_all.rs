use outcome_kit::{ FailureMessage, Outcome, TypedOutcome, ValueOutcome };

use crate::ValidationError ;

#[test]
fn combine_all_successes() {

	let combined = Outcome::combine( vec![ Outcome::ok(); 5 ]);
	assert_eq!( combined, Outcome::ok() );

}

#[test]
fn combine_nothing_is_success() {
	assert!( Outcome::combine( Vec::<Outcome>::new() ).is_success() );
}

#[test]
fn combine_with_separator_keeps_order_and_skips_successes() {

	let combined = Outcome::combine_with( ",", [ Outcome::fail( "a" ), Outcome::ok(), Outcome::fail( "b" ) ]);

	assert!( combined.is_failure() );
	assert_eq!( combined.error(), "a,b" );

}

#[test]
fn combine_uses_default_separator() {

	let combined = Outcome::combine([ Outcome::fail( "first" ), Outcome::fail( "second" ), Outcome::fail( "third" ) ]);

	assert_eq!( Outcome::DEFAULT_SEPARATOR, ", " );
	assert_eq!( combined.error(), "first, second, third" );

}

#[test]
fn combine_with_empty_separator() {

	let combined = Outcome::combine_with( "", [ Outcome::fail( "x" ), Outcome::fail( "y" ) ]);
	assert_eq!( combined.error(), "xy" );

}

#[test]
fn combine_single_result_with_itself() {

	let failed = Outcome::fail( "once" );
	let combined = Outcome::combine([ &failed ]);
	assert_eq!( combined, failed );

	let succeeded = Outcome::ok();
	assert_eq!( Outcome::combine([ &succeeded ]), succeeded );

}

#[test]
fn combine_value_outcomes_discards_values() {

	let results = vec![
		ValueOutcome::ok( 10 ),
		ValueOutcome::fail( "quota exceeded" ),
		ValueOutcome::ok( 20 ),
		ValueOutcome::fail( "rate limited" ),
	];

	assert_eq!( Outcome::combine_with( " | ", &results ).error(), "quota exceeded | rate limited" );
	assert_eq!( Outcome::combine( results ).error(), "quota exceeded, rate limited" );

}

#[test]
fn combine_typed_outcomes_stringifies_errors() {

	let results = vec![
		TypedOutcome::<(), _>::fail( ValidationError::new( "name", "empty" )),
		TypedOutcome::ok(()),
		TypedOutcome::fail( ValidationError::new( "age", "negative" )),
	];

	assert_eq!( Outcome::combine( &results ).error(), "name: empty, age: negative" );

}

#[test]
fn combine_borrowed_inputs_lend_their_messages() {

	let outcome = Outcome::fail( "lent" );
	let value_outcome = ValueOutcome::<u8>::fail( "also lent" );

	let message = ( &outcome ).failure_message().expect( "failed outcome" );
	assert!( std::ptr::eq( message, outcome.error() ));

	let message = ( &value_outcome ).failure_message().expect( "failed outcome" );
	assert!( std::ptr::eq( message, value_outcome.error() ));

	assert_eq!( ( &Outcome::ok() ).failure_message(), None );

}

#[test]
fn combine_typed_error_with_empty_text_among_others() {

	let results = [
		TypedOutcome::<(), String>::fail( String::new() ),
		TypedOutcome::fail( "named".to_string() ),
	];

	assert_eq!( Outcome::combine_with( ";", &results ).error(), ";named" );

}

#[test]
#[should_panic( expected = "There must be error message for failure." )]
fn combine_panics_when_merged_message_is_empty() {
	let _ = Outcome::combine([ TypedOutcome::<(), String>::fail( String::new() ) ]);
}
