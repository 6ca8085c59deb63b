#[macro_use]
extern crate rocket;

mod aggregate;
mod ai;
mod auth;
mod config;
mod models;
mod routes;
mod seed;
mod store;


use rocket::serde::json::Json;
use serde_json::{json, Value};

use config::Config;
use store::memory::MemStore;
use store::sqlite::SqliteStore;
use store::Store;

#[catch(400)]
fn bad_request() -> Json<Value> {
    Json(json!({ "message": "Bad request" }))
}

#[catch(401)]
fn unauthorized() -> Json<Value> {
    Json(json!({ "message": "Unauthorized: No token provided" }))
}

#[catch(403)]
fn forbidden() -> Json<Value> {
    Json(json!({ "message": "Forbidden: Invalid token" }))
}

#[catch(404)]
fn not_found() -> Json<Value> {
    Json(json!({ "message": "Not found" }))
}

#[catch(422)]
fn unprocessable() -> Json<Value> {
    Json(json!({ "message": "Malformed request body" }))
}

#[catch(500)]
fn server_error() -> Json<Value> {
    Json(json!({ "message": "Internal server error" }))
}

/// Assemble the application around an injected store, so tests can run the
/// full HTTP surface against a fresh in-memory instance.
pub fn build_rocket(config: Config, store: Box<dyn Store>) -> rocket::Rocket<rocket::Build> {
    rocket::build()
        .manage(config)
        .manage(store)
        .mount("/api", routes::auth::routes())
        .mount("/api", routes::dashboard::routes())
        .mount("/api", routes::platforms::routes())
        .mount("/api", routes::bookmarks::routes())
        .mount("/api", routes::ai::routes())
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                forbidden,
                not_found,
                unprocessable,
                server_error
            ],
        )
}

#[launch]
fn rocket() -> _ {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let config = Config::from_env();

    let store: Box<dyn Store> = if config.database == "memory" {
        log::info!("Using in-memory store (data is lost on exit)");
        Box::new(MemStore::new())
    } else {
        log::info!("Using SQLite store at {}", config.database);
        Box::new(SqliteStore::new(&config.database).expect("Failed to open SQLite store"))
    };

    if config.seed_demo {
        if let Err(e) = seed::seed_demo(store.as_ref()) {
            log::error!("Demo seed failed: {}", e);
        }
    }

    build_rocket(config, store)
}
