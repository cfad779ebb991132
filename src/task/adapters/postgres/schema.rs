//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Free-text description.
        #[max_length = 500]
        detail -> Varchar,
        /// Owning employee identifier.
        owner_id -> Uuid,
        /// Creation date.
        created_on -> Date,
        /// Deadline date.
        dead_line -> Date,
        /// Workflow state.
        #[max_length = 20]
        state -> Varchar,
    }
}
