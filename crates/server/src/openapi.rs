use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerInputDoc { pub name: String, pub phone: String }

#[derive(ToSchema)]
pub struct CustomerDoc {
    pub id: i32,
    pub name: String,
    pub phone: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct AppointmentCreateDoc {
    pub customer_id: i32,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    /// Defaults to `pending`
    pub status: Option<String>,
}

/// Omitted fields are left unchanged; `notes: null` clears the notes.
#[derive(ToSchema)]
pub struct AppointmentUpdateDoc {
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct AppointmentDoc {
    pub id: i32,
    pub customer_id: i32,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub status: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Salon booking API"),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::create,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::appointments::list,
        crate::routes::appointments::list_by_customer,
        crate::routes::appointments::create,
        crate::routes::appointments::get,
        crate::routes::appointments::update,
        crate::routes::appointments::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerInputDoc,
            CustomerDoc,
            AppointmentCreateDoc,
            AppointmentUpdateDoc,
            AppointmentDoc,
        )
    ),
    tags(
        (name = "meta"),
        (name = "customers"),
        (name = "appointments")
    )
)]
pub struct ApiDoc;
