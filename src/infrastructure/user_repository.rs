use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::user::{NewUser, User},
        repositories::user_repository::UserRepository,
    },
    infrastructure::entity::user,
};

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_db_error(error: DbErr) -> RepositoryError {
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::UniqueViolation(detail),
        _ => RepositoryError::DatabaseError(error.to_string()),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, RepositoryError> {
        let existing = user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(username))
                    .add(user::Column::Email.eq(email)),
            )
            .one(&self.db)
            .await
            .map_err(map_db_error)?;

        Ok(existing.is_some())
    }

    async fn save(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let model = user::ActiveModel {
            id: NotSet,
            username: Set(new_user.username().to_string()),
            password: Set(new_user.password_hash().as_str().to_string()),
            email: Set(new_user.email().to_string()),
            created_time: Set(new_user.created_time()),
            updated_time: Set(None),
        };

        let insert_result = user::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_error)?;

        Ok(new_user.into_user(insert_result.last_insert_id))
    }
}
