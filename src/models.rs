extern crate diesel;

use crate::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Identifiable, Queryable, Serialize, Deserialize, Debug)]
#[table_name = "users"]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Insertable)]
#[table_name = "users"]
pub struct UserNoId {
    pub username: String,
    pub password: String,
}

#[derive(Identifiable, Queryable, Serialize, Deserialize, Debug)]
#[table_name = "videos"]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub filename: String,
}

#[derive(Insertable, Debug, Serialize, Deserialize)]
#[table_name = "videos"]
pub struct VideoNoId {
    pub title: String,
    pub filename: String,
}
