diesel::table! {
    slots (id) {
        id -> Uuid,
        date -> Date,
        time -> Varchar,
        bookable -> Bool,
    }
}

diesel::table! {
    appointments (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
        date -> Date,
        time -> Varchar,
        notes -> Nullable<Text>,
        status -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
