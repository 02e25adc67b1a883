pub mod sql;

use crate::models::VideoNoId;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::Redirect;
use rocket_dyn_templates::Template;
use serde_json::json;
use std::path::Path;

pub const VIDEO_DIR: &str = "static/videos";

#[derive(FromForm)]
pub struct UploadForm<'r> {
    pub title: String,
    pub file: TempFile<'r>,
}

#[get("/feed")]
pub async fn feed() -> Template {
    let videos = sql::get_all_videos().unwrap_or_default();
    Template::render("feed", json!({ "videos": videos }))
}

#[post("/upload", data = "<form>")]
pub async fn upload(form: Form<UploadForm<'_>>) -> Result<Redirect, Status> {
    let mut form = form.into_inner();

    // The file is stored under the name the client sent, untouched
    let filename = match form.file.raw_name() {
        Some(name) => name.dangerous_unsafe_unsanitized_raw().as_str().to_string(),
        None => {
            info!("Upload without a filename");
            String::new()
        }
    };

    let file_path = Path::new(VIDEO_DIR).join(&filename);
    if let Err(e) = form.file.copy_to(&file_path).await {
        warn!(
            "Failed to write {} with error : {}",
            file_path.to_str().unwrap_or("\"Failed on unwrap\""),
            e
        );
        return Err(Status::InternalServerError);
    }

    let video = VideoNoId {
        title: form.title,
        filename,
    };
    match sql::insert_new_video(&video) {
        Some(_) => Ok(Redirect::to("/feed")),
        None => Err(Status::InternalServerError),
    }
}
