use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment backed by an in-memory SQLite database.
///
/// Each setup owns a fresh database, so tests are fully isolated and can run
/// in parallel without touching an external store.
pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        init_tracing();

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Routes service tracing output through the test harness, honoring
/// `RUST_LOG`. Only the first call installs the subscriber.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Sets up the full rental schema: equipment, quotations, invoices, rentals
/// and expenses. Most service-level tests want all of it.
#[macro_export]
macro_rules! test_setup_with_rental_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::Equipment,
            entity::prelude::Quotation,
            entity::prelude::QuotationItem,
            entity::prelude::Invoice,
            entity::prelude::InvoiceItem,
            entity::prelude::Rental,
            entity::prelude::Expense,
        )
    }};
}
