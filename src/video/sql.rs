extern crate diesel;

use crate::{
    create_connection,
    models::{Video, VideoNoId},
};
use diesel::prelude::*;

pub fn insert_new_video(video: &VideoNoId) -> Option<usize> {
    let connection = create_connection().expect("Failed to connect to database");
    match diesel::insert_into(crate::schema::videos::table)
        .values(video)
        .execute(&connection)
    {
        Ok(rows) => Some(rows),
        Err(e) => {
            info!(
                "Failed to insert video {} (error {})",
                video.filename, e
            );
            None
        }
    }
}

pub fn get_all_videos() -> Option<Vec<Video>> {
    let connection = create_connection().expect("Failed to connect to database");
    match crate::schema::videos::table.load::<Video>(&connection) {
        Ok(videos) => Some(videos),
        Err(e) => {
            if e == diesel::NotFound {
                info!("Failed to get videos with error {}", e);
            } else {
                warn!("Failed to get videos (error {})", e);
            }
            None
        }
    }
}
