use utoipa_axum::{router::OpenApiRouter, routes};

use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(feed_routes())
        .nest("/auth", auth_routes())
        .nest("/statuses", status_routes())
        .nest("/links", link_routes())
        .nest("/likes", like_routes())
}

fn feed_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::home::*;

    OpenApiRouter::new().routes(routes!(show))
}

fn auth_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::auth::*;

    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(me, delete_account))
}

fn status_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::comment::*;
    use crate::handlers::like::*;
    use crate::handlers::status::*;

    OpenApiRouter::new()
        .routes(routes!(create_status))
        .routes(routes!(new_status))
        .routes(routes!(get_status, delete_status))
        .routes(routes!(create_status_comment))
        .routes(routes!(like_status))
}

fn link_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::comment::*;
    use crate::handlers::like::*;
    use crate::handlers::link::*;

    OpenApiRouter::new()
        .routes(routes!(create_link))
        .routes(routes!(new_link))
        .routes(routes!(get_link, delete_link))
        .routes(routes!(create_link_comment))
        .routes(routes!(like_link))
}

fn like_routes() -> OpenApiRouter<AppState> {
    use crate::handlers::like::*;

    OpenApiRouter::new()
        .routes(routes!(create_like))
        .routes(routes!(delete_like))
}
