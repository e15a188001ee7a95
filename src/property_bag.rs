//! Persistence hook for host serialization frameworks (`serde` feature).
//!
//! Every outcome is written as a flat property bag with the keys `IsFailure`
//! and `IsSuccess`, plus `Error` when it failed and `Value` when a
//! value-carrying outcome succeeded. Reading a bag back goes through the same
//! checked constructors as code, so a bag that breaks an outcome invariant is
//! rejected with the [`ConstructionError`]( crate::ConstructionError ) text.

use serde::de::{ Error as _, IgnoredAny };
use serde::ser::SerializeStruct ;
use serde::{ Deserialize, Deserializer, Serialize, Serializer };

use crate::{ Outcome, TypedOutcome, ValueOutcome };



#[derive( Deserialize )]
#[serde( rename_all = "PascalCase", bound( deserialize = "T: Deserialize<'de>, E: Deserialize<'de>" ))]
struct PropertyBag<T, E> {
	is_failure: bool,
	is_success: Option<bool>,
	#[serde( default, deserialize_with = "present" )]
	error: Option<E>,
	#[serde( default, deserialize_with = "present" )]
	value: Option<T>,
}

/// Reads a key that is present in the bag, even when it holds `null`.
///
/// Only an absent key maps to `None`, so a success whose value serializes
/// to `null` (unit, `Option::None`) reads back as a success.
fn present<'de, D, T>( deserializer: D ) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize( deserializer ).map( Some )
}

impl<T, E> PropertyBag<T, E> {
	fn checked_is_failure<DeError: serde::de::Error>( &self ) -> Result<bool, DeError> {
		match self.is_success {
			Some( is_success ) if is_success == self.is_failure => Err( DeError::custom( "IsSuccess and IsFailure disagree" )),
			_ => Ok( self.is_failure ),
		}
	}
}

fn write_bag<S, T, E>(
	serializer: S,
	name: &'static str,
	is_failure: bool,
	value: Option<&T>,
	error: Option<&E>,
) -> Result<S::Ok, S::Error>
where
	S: Serializer,
	T: Serialize + ?Sized,
	E: Serialize + ?Sized,
{
	let mut bag = serializer.serialize_struct( name, 3 )?;
	bag.serialize_field( "IsFailure", &is_failure )?;
	bag.serialize_field( "IsSuccess", &!is_failure )?;
	match error {
		Some( error ) => bag.serialize_field( "Error", error )?,
		None => bag.skip_field( "Error" )?,
	}
	match value {
		Some( value ) => bag.serialize_field( "Value", value )?,
		None => bag.skip_field( "Value" )?,
	}
	bag.end()
}

impl Serialize for Outcome {
	fn serialize<S: Serializer>( &self, serializer: S ) -> Result<S::Ok, S::Error> {
		write_bag::<_, (), _>( serializer, "Outcome", self.is_failure(), None, self.state.error().map( String::as_str ) )
	}
}

impl<'de> Deserialize<'de> for Outcome {
	fn deserialize<D: Deserializer<'de>>( deserializer: D ) -> Result<Self, D::Error> {
		let bag = PropertyBag::<IgnoredAny, String>::deserialize( deserializer )?;
		Outcome::from_parts( bag.checked_is_failure::<D::Error>()?, bag.error ).map_err( D::Error::custom )
	}
}

impl<T: Serialize> Serialize for ValueOutcome<T> {
	fn serialize<S: Serializer>( &self, serializer: S ) -> Result<S::Ok, S::Error> {
		let error = self.inner.as_ref().err().map( String::as_str );
		write_bag( serializer, "ValueOutcome", self.is_failure(), self.value(), error )
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ValueOutcome<T> {
	fn deserialize<D: Deserializer<'de>>( deserializer: D ) -> Result<Self, D::Error> {
		let bag = PropertyBag::<T, String>::deserialize( deserializer )?;
		ValueOutcome::from_parts( bag.checked_is_failure::<D::Error>()?, bag.value, bag.error ).map_err( D::Error::custom )
	}
}

impl<T: Serialize, E: Serialize> Serialize for TypedOutcome<T, E> {
	fn serialize<S: Serializer>( &self, serializer: S ) -> Result<S::Ok, S::Error> {
		write_bag( serializer, "TypedOutcome", self.is_failure(), self.value(), self.error() )
	}
}

impl<'de, T: Deserialize<'de>, E: Deserialize<'de>> Deserialize<'de> for TypedOutcome<T, E> {
	fn deserialize<D: Deserializer<'de>>( deserializer: D ) -> Result<Self, D::Error> {
		let bag = PropertyBag::<T, E>::deserialize( deserializer )?;
		TypedOutcome::from_parts( bag.checked_is_failure::<D::Error>()?, bag.value, bag.error ).map_err( D::Error::custom )
	}
}
