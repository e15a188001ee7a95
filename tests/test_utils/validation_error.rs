/// Typed error shared by the tests that need a non-string failure payload.
#[allow( dead_code )]
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct ValidationError {
	pub field: &'static str,
	pub reason: &'static str,
}

#[allow( dead_code )]
impl ValidationError {
	pub fn new( field: &'static str, reason: &'static str ) -> Self { Self { field, reason }}
}

impl std::fmt::Display for ValidationError {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}: {}", self.field, self.reason )
	}
}
