//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Student conversions =====

impl From<contract::Student> for StudentDto {
    fn from(student: contract::Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            group_id: student.group_id,
        }
    }
}

impl From<CreateStudentRequest> for contract::NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

// ===== Group conversions =====

impl From<contract::Group> for GroupDto {
    fn from(group: contract::Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            students: group.students.into_iter().map(StudentDto::from).collect(),
        }
    }
}

impl From<CreateGroupRequest> for contract::NewGroup {
    fn from(req: CreateGroupRequest) -> Self {
        Self { name: req.name }
    }
}
