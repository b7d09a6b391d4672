use crate::models::{UpdateOutcome, User, UserChanges};
use crate::utils::AppError;
use async_trait::async_trait;

/// Operações de persistência usadas pelos handlers.
///
/// Todas as operações filtram pelo campo `id` do documento.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insere o documento como está, sem checar duplicidade de `id`
    async fn insert_one(&self, user: &User) -> Result<(), AppError>;

    /// Primeiro documento com o `id` informado; `None` se não existir
    async fn find_one(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Atualiza `name` e `email` do primeiro documento com o `id`
    async fn update_one(&self, id: &str, changes: &UserChanges) -> Result<UpdateOutcome, AppError>;

    /// Remove todos os documentos com o `id`; retorna quantos foram removidos
    async fn delete_many(&self, id: &str) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
