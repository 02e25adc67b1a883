use crate::{
    create_connection,
    models::{User, UserNoId},
};
use diesel::prelude::*;

pub fn get_user_by_username(username: &str) -> Option<User> {
    let connection = match create_connection() {
        Some(connection) => connection,
        None => {
            warn!("Failed to get connection to database");
            return None;
        }
    };
    match crate::schema::users::table
        .filter(crate::schema::users::dsl::username.eq(username.to_owned()))
        .get_result::<User>(&connection)
    {
        Ok(user) => Some(user),
        Err(e) => {
            if e != diesel::NotFound {
                warn!("Failed to get user {} with error {}", username, e);
            }
            None
        }
    }
}

pub fn insert_user(user: &UserNoId) -> Option<User> {
    let connection = create_connection().expect("Failed to connect to database");
    match diesel::insert_into(crate::schema::users::table)
        .values(user)
        .execute(&connection)
    {
        // SQLite has no RETURNING, read the row back by its unique username
        Ok(_) => get_user_by_username(&user.username),
        Err(e) => {
            info!("Failed to insert user {} (error {})", user.username, e);
            None
        }
    }
}
