table! {
    users (id) {
        id -> Integer,
        username -> Text,
        password -> Text,
    }
}

table! {
    videos (id) {
        id -> Integer,
        title -> Text,
        filename -> Text,
    }
}

allow_tables_to_appear_in_same_query!(users, videos,);
