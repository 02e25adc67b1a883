#[macro_use]
extern crate rocket;

#[macro_use]
extern crate diesel;

#[macro_use]
extern crate diesel_migrations;

embed_migrations!("migrations");

mod auth;
mod models;
mod schema;
mod util;
mod video;


use diesel::prelude::*;
use dotenv::dotenv;
use rocket::data::{Limits, ToByteUnit};
use rocket::fs::NamedFile;
use rocket::{routes, Build, Rocket};
use rocket_dyn_templates::Template;
use std::{
    env,
    path::{Path, PathBuf},
};

#[get("/static/<file..>")]
async fn files(file: PathBuf) -> Option<NamedFile> {
    NamedFile::open(Path::new("static/").join(file)).await.ok()
}

#[rocket::main]
async fn main() {
    dotenv().ok();

    let connection = create_connection().expect("Failed to connect to database");

    embedded_migrations::run(&connection).expect("Failed to run embedded migrations");

    std::mem::drop(connection);

    match build_rocket().launch().await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn build_rocket() -> Rocket<Build> {
    std::fs::create_dir_all(video::VIDEO_DIR).expect("Failed to create video directory");

    // Default multipart limits are far too small for video files
    let figment = rocket::Config::figment().merge((
        "limits",
        Limits::default()
            .limit("file", 512i64.mebibytes())
            .limit("data-form", 512i64.mebibytes()),
    ));

    rocket::custom(figment)
        .mount(
            "/",
            routes![
                files,
                auth::login_page,
                auth::login,
                video::feed,
                video::upload,
            ],
        )
        .attach(Template::fairing())
}

fn create_connection() -> Option<SqliteConnection> {
    let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| String::from("app.db"));
    Some(unwrap_or_return!(
        SqliteConnection::establish(&database_url),
        "Error connecting to database!"
    ))
}
