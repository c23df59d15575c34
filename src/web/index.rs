use crate::web::views::{SiteIndex, SiteLinks};
use axum::Json;

pub async fn index() -> Json<SiteIndex> {
    Json(SiteIndex {
        title: "Holiday Homes",
        links: SiteLinks {
            lettings: "/lettings/",
            profiles: "/profiles/",
        },
    })
}
