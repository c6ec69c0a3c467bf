diesel::table! {
    persons (id) {
        id -> Text,
        name -> Text,
        number -> Text,
        version -> Integer,
        created_at -> Text,
        updated_at -> Text,
    }
}
