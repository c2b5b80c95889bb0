use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct LivenessDoc { pub response: String }

#[derive(ToSchema)]
pub struct CreateUserDoc { pub name: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::create_user,
        crate::routes::list_users,
    ),
    components(
        schemas(
            LivenessDoc,
            CreateUserDoc,
            UserDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "users"),
    )
)]
pub struct ApiDoc;
