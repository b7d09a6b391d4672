use actix_web::{
    dev::Payload, web, FromRequest, HttpMessage, HttpRequest, HttpResponse, Responder,
    ResponseError,
};
use futures::future::LocalBoxFuture;
use crate::{
    database::UserStore,
    models::{User, UserChanges},
    utils::AppError,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Corpo aceito pelo `POST /users`.
///
/// O extrator é escolhido pelo `Content-Type`: formulário para
/// `application/x-www-form-urlencoded`, JSON para o resto. Assim o erro
/// devolvido é sempre o do formato que o cliente enviou.
pub struct UserBody(pub User);

impl UserBody {
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl FromRequest for UserBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if req.content_type() == FORM_CONTENT_TYPE {
            let fut = web::Form::<User>::from_request(req, payload);
            Box::pin(async move { fut.await.map(|form| UserBody(form.into_inner())) })
        } else {
            let fut = web::Json::<User>::from_request(req, payload);
            Box::pin(async move { fut.await.map(|json| UserBody(json.into_inner())) })
        }
    }
}

/// POST /users - Cria usuário
///
/// O `id` vem do cliente e não é checada duplicidade.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(
        description = "User as JSON or as a form",
        content(
            (User = "application/json"),
            (User = "application/x-www-form-urlencoded")
        )
    ),
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Request body could not be bound"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_user(store: web::Data<dyn UserStore>, body: UserBody) -> impl Responder {
    let user = body.into_inner();

    match store.insert_one(&user).await {
        Ok(()) => {
            log::info!("✅ Inserted user {}", user.id);
            HttpResponse::Created().json(user)
        }
        Err(e) => {
            log::error!("❌ Error inserting user {}: {}", user.id, e);
            e.error_response()
        }
    }
}

/// GET /users/{id} - Busca usuário
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this id", body = String, content_type = "text/plain"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_user(store: web::Data<dyn UserStore>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();

    match store.find_one(&id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => {
            log::info!("🔍 User {} not found", id);
            AppError::NotFound(format!("{} is not exist", id)).error_response()
        }
        Err(e) => {
            log::error!("❌ Error fetching user {}: {}", id, e);
            e.error_response()
        }
    }
}

/// PUT /users/{id}?name=&email= - Atualiza nome e email
///
/// Responde 200 mesmo quando nenhum documento tem o `id`. O corpo é o `id`
/// serializado como string JSON (`"u1"`, com aspas), não texto puro.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id"), UserChanges),
    responses(
        (status = 200, description = "Update issued; echoes the id as a JSON string", body = String, content_type = "application/json"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    id: web::Path<String>,
    changes: web::Query<UserChanges>,
) -> impl Responder {
    let id = id.into_inner();

    match store.update_one(&id, &changes).await {
        Ok(outcome) => {
            log::info!(
                "🔧 Updated user {} (matched: {}, modified: {})",
                id, outcome.matched, outcome.modified
            );
            HttpResponse::Ok().json(id)
        }
        Err(e) => {
            log::error!("❌ Error updating user {}: {}", id, e);
            e.error_response()
        }
    }
}

/// DELETE /users/{id} - Remove todos os documentos com o id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Delete issued", body = String, content_type = "text/plain"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_user(store: web::Data<dyn UserStore>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();

    match store.delete_many(&id).await {
        Ok(deleted) => {
            log::info!("🗑️  Deleted {} documents for user {}", deleted, id);
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format!("{} is deleted", id))
        }
        Err(e) => {
            log::error!("❌ Error deleting user {}: {}", id, e);
            e.error_response()
        }
    }
}
