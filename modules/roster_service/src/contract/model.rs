//! Contract models for the roster service

/// A persisted student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Generated identity
    pub id: i32,
    /// Display name
    pub name: String,
    /// Email, unique across all students
    pub email: String,
    /// Owning group, `None` when the student is not in any group
    pub group_id: Option<i32>,
}

/// A persisted group together with its current members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Generated identity
    pub id: i32,
    /// Name, unique across all groups
    pub name: String,
    /// Students whose `group_id` equals `id`, ordered by student id.
    /// Always read from storage, never stored on the group row.
    pub students: Vec<Student>,
}

/// Payload for creating a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

/// Payload for creating a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
}

/// Offset pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip
    pub skip: u64,
    /// Maximum number of records to return
    pub limit: u64,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
