use std::path::Path;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{ContentType, Header};
use rocket::{Request, Response};
use crate::assets::{cache_policy, NO_CACHE};

pub struct StaticHeaders;

#[rocket::async_trait]
impl Fairing for StaticHeaders {
    fn info(&self) -> Info {
        Info {
            name: "Static asset headers",
            kind: Kind::Response
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        // SPA fallbacks answer unknown paths with index.html, which must never be cached
        let policy = if res.content_type() == Some(ContentType::HTML) {
            NO_CACHE
        } else {
            cache_policy(Path::new(req.uri().path().as_str()))
        };
        res.set_header(Header::new("Cache-Control", policy));
        res.set_header(Header::new("X-Content-Type-Options", "nosniff"));
    }
}
