pub mod sql;

use crate::models::UserNoId;
use rocket::form::Form;
use rocket::response::Redirect;
use rocket_dyn_templates::Template;
use serde_json::json;

#[derive(FromForm)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[get("/")]
pub async fn login_page() -> Template {
    Template::render("login", json!({}))
}

/// Auto-registers unknown usernames; known users are waved through without a
/// password check and the stored password is left untouched.
#[post("/login", data = "<form>")]
pub async fn login(form: Form<LoginForm>) -> Redirect {
    let form = form.into_inner();

    if sql::get_user_by_username(&form.username).is_none() {
        sql::insert_user(&UserNoId {
            username: form.username,
            password: form.password,
        });
    }

    Redirect::to("/feed")
}
