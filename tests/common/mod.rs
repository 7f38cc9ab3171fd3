mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_equilibrium_valid, assert_record_valid};
pub use fixtures::*;
pub use test_app::TestAppBuilder;
