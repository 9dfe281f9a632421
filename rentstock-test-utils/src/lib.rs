pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::equipment, fixtures::invoice, test_setup_with_rental_tables,
        test_setup_with_tables, TestError, TestSetup,
    };
}
