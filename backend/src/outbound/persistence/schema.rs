//! Diesel table definitions. Must match `migrations/`.

diesel::table! {
    heroes (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        #[max_length = 100]
        super_name -> Varchar,
    }
}

diesel::table! {
    powers (id) {
        id -> Int4,
        #[max_length = 100]
        name -> Varchar,
        #[max_length = 255]
        description -> Varchar,
    }
}

diesel::table! {
    /// Association rows; `strength` is stored as text and parsed on read.
    hero_powers (id) {
        id -> Int4,
        hero_id -> Int4,
        power_id -> Int4,
        #[max_length = 50]
        strength -> Varchar,
    }
}

diesel::joinable!(hero_powers -> heroes (hero_id));
diesel::joinable!(hero_powers -> powers (power_id));

diesel::allow_tables_to_appear_in_same_query!(heroes, hero_powers, powers);
