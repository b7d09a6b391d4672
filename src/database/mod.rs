mod store;
#[cfg(test)]
pub mod memory;

pub use store::UserStore;

use crate::config::Config;
use crate::models::{UpdateOutcome, User, UserChanges};
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
    users: Collection<User>,
}

impl MongoDB {
    /// Conecta uma única vez e valida a conexão com `ping`
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(&config.mongodb_uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.mongodb_database);
        let users = db.collection::<User>(&config.mongodb_collection);

        let mongodb = Self { db, users };

        // Test connection
        mongodb.ping().await?;

        log::info!(
            "Connected to MongoDB: {}.{}",
            config.mongodb_database,
            config.mongodb_collection
        );

        Ok(mongodb)
    }
}

#[async_trait]
impl UserStore for MongoDB {
    async fn insert_one(&self, user: &User) -> Result<(), AppError> {
        let result = self.users.insert_one(user).await?;
        log::debug!("Inserted document {} for user {}", result.inserted_id, user.id);
        Ok(())
    }

    async fn find_one(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.find_one(doc! { "id": id }).await?)
    }

    async fn update_one(&self, id: &str, changes: &UserChanges) -> Result<UpdateOutcome, AppError> {
        let update = doc! {
            "$set": {
                "name": &changes.name,
                "email": &changes.email,
            }
        };

        let result = self.users.update_one(doc! { "id": id }, update).await?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_many(&self, id: &str) -> Result<u64, AppError> {
        let result = self.users.delete_many(doc! { "id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
