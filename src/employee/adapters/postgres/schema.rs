//! Diesel schema for employee persistence.

diesel::table! {
    /// Employee directory records.
    employees (id) {
        /// Employee identifier.
        id -> Uuid,
        /// Given name.
        #[max_length = 100]
        name -> Varchar,
        /// Family name.
        #[max_length = 100]
        surname -> Varchar,
        /// Contact email address.
        #[max_length = 255]
        email -> Varchar,
        /// Contact phone number.
        #[max_length = 50]
        phone -> Varchar,
        /// National identifier.
        #[max_length = 50]
        citizen_id -> Varchar,
        /// Team role.
        #[max_length = 50]
        position -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
