//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title, unique across all rows.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        creation_date -> Timestamptz,
        /// Expiration timestamp.
        expiration_date -> Timestamptz,
    }
}
