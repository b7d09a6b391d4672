use serde::{Deserialize, Serialize};

/// Documento da coleção `users`.
///
/// O `id` é fornecido pelo cliente e não é o `_id` do MongoDB; nada impede
/// dois documentos com o mesmo `id`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Campos alterados pelo `PUT /users/{id}` (vindos da query string)
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq, utoipa::IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct UserChanges {
    /// Novo nome (vazio se ausente)
    pub name: String,
    /// Novo email (vazio se ausente)
    pub email: String,
}

/// Resultado de um update: documentos encontrados e modificados
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}
