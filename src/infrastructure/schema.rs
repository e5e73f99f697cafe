use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};
use tracing::info;

use crate::infrastructure::entity::user;

/// Create `user_table` from the entity definition unless it already exists
pub async fn create_user_table(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(user::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    info!(table = "user_table", "User table ready");

    Ok(())
}
