//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Group, NewGroup, NewStudent, Student};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Student Conversions =====

impl From<entity::Model> for Student {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            group_id: entity.group_id,
        }
    }
}

/// Build an insertable row; the id is generated by the database
pub fn new_student_active_model(student: &NewStudent, group_id: Option<i32>) -> entity::ActiveModel {
    entity::ActiveModel {
        id: NotSet,
        name: Set(student.name.clone()),
        email: Set(student.email.clone()),
        group_id: Set(group_id),
    }
}

// ===== Group Conversions =====

/// Combine a group row with its member rows
pub fn group_from_entities(group: entity::group::Model, members: Vec<entity::Model>) -> Group {
    Group {
        id: group.id,
        name: group.name,
        students: members.into_iter().map(Student::from).collect(),
    }
}

impl From<&NewGroup> for entity::group::ActiveModel {
    fn from(group: &NewGroup) -> Self {
        Self {
            id: NotSet,
            name: Set(group.name.clone()),
        }
    }
}
