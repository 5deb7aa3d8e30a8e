use backend::{
    assets::{self, ENTRY_POINT},
    catchers::{internal_error, not_found},
    headers::StaticHeaders,
};
use rocket::{routes, catchers, fs::NamedFile, State};
use shuttle_runtime::CustomError;
use std::path::PathBuf;
use tracing::{info, warn, debug};
use include_dir::{include_dir, Dir};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[rocket::get("/<path..>")]
async fn spa_handler(path: PathBuf, root: &State<PathBuf>) -> Option<NamedFile> {
    let file = assets::resolve(root, &path);
    if !file.ends_with(&path) {
        debug!("↪ {} served by {}", path.display(), ENTRY_POINT);
    }
    NamedFile::open(&file).await.ok()
}

#[shuttle_runtime::main]
async fn rocket() -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting AI Art Battle Arena host");

    if STATIC_DIR.get_file(ENTRY_POINT).is_none() {
        warn!("{} not bundled - build the frontend before compiling the host", ENTRY_POINT);
    }

    let root = assets::stage(&STATIC_DIR).map_err(CustomError::new)?;
    info!("📦 Static files staged in {}", root.display());

    let rocket = rocket::build()
        .attach(StaticHeaders)
        .manage(root)
        .mount("/", routes![spa_handler])
        .register("/", catchers![not_found, internal_error]);

    Ok(rocket.into())
}
