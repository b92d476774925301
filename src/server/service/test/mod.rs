use crate::server::error::{auth::AuthError, AppError};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, context::TestContext, factory};


async fn conduit_db() -> TestContext {
    TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap()
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}
