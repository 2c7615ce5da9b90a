//! SeaORM repository implementations
//!
//! Each method opens its own transaction. The pooled connection behind it is
//! returned to the pool on commit, or on drop (rollback) when an error
//! short-circuits the method.

use crate::contract::{Group, NewGroup, NewStudent, Page, Student};
use crate::domain::repository::{ConstraintViolation, GroupRepository, StudentRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::{entity, mapper};

/// Translate constraint failures into `ConstraintViolation`, pass anything
/// else through untouched.
fn map_write_error(err: DbErr, resource: &'static str, unique_field: &'static str) -> anyhow::Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConstraintViolation::Duplicate {
            resource,
            field: unique_field,
        }
        .into(),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ConstraintViolation::MissingReference {
            resource,
            target: "Group",
        }
        .into(),
        _ => err.into(),
    }
}

// ===== Student Repository =====

pub struct SeaOrmStudentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStudentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>> {
        let txn = self.db.begin().await?;
        let result = entity::Entity::find_by_id(id).one(&txn).await?;
        txn.commit().await?;

        Ok(result.map(Student::from))
    }

    async fn list(&self, page: Page) -> Result<Vec<Student>> {
        let txn = self.db.begin().await?;
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&txn)
            .await?;
        txn.commit().await?;

        Ok(results.into_iter().map(Student::from).collect())
    }

    async fn create(&self, student: &NewStudent, group_id: Option<i32>) -> Result<Student> {
        let txn = self.db.begin().await?;
        let created = mapper::new_student_active_model(student, group_id)
            .insert(&txn)
            .await
            .map_err(|e| map_write_error(e, "Student", "email"))?;
        txn.commit().await?;

        Ok(created.into())
    }

    async fn set_group(&self, id: i32, group_id: Option<i32>) -> Result<Option<Student>> {
        let txn = self.db.begin().await?;
        let Some(existing) = entity::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::ActiveModel = existing.into();
        active.group_id = Set(group_id);
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| map_write_error(e, "Student", "email"))?;
        txn.commit().await?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;
        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_by_group(&self, group_id: i32) -> Result<Vec<Student>> {
        let txn = self.db.begin().await?;
        let results = entity::Entity::find()
            .filter(entity::Column::GroupId.eq(group_id))
            .order_by_asc(entity::Column::Id)
            .all(&txn)
            .await?;
        txn.commit().await?;

        Ok(results.into_iter().map(Student::from).collect())
    }
}

// ===== Group Repository =====

pub struct SeaOrmGroupRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmGroupRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Attach members to each group with a single lookup on `students.group_id`
async fn with_members<C: ConnectionTrait>(
    conn: &C,
    groups: Vec<entity::group::Model>,
) -> Result<Vec<Group>, DbErr> {
    if groups.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    let students = entity::Entity::find()
        .filter(entity::Column::GroupId.is_in(ids))
        .order_by_asc(entity::Column::Id)
        .all(conn)
        .await?;

    let mut by_group: HashMap<i32, Vec<entity::Model>> = HashMap::new();
    for student in students {
        if let Some(group_id) = student.group_id {
            by_group.entry(group_id).or_default().push(student);
        }
    }

    Ok(groups
        .into_iter()
        .map(|group| {
            let members = by_group.remove(&group.id).unwrap_or_default();
            mapper::group_from_entities(group, members)
        })
        .collect())
}

#[async_trait]
impl GroupRepository for SeaOrmGroupRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Group>> {
        let txn = self.db.begin().await?;
        let Some(group) = entity::group::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let mut groups = with_members(&txn, vec![group]).await?;
        txn.commit().await?;

        Ok(groups.pop())
    }

    async fn list(&self, page: Page) -> Result<Vec<Group>> {
        let txn = self.db.begin().await?;
        let groups = entity::group::Entity::find()
            .order_by_asc(entity::group::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&txn)
            .await?;
        let groups = with_members(&txn, groups).await?;
        txn.commit().await?;

        Ok(groups)
    }

    async fn create(&self, group: &NewGroup) -> Result<Group> {
        let txn = self.db.begin().await?;
        let active: entity::group::ActiveModel = group.into();
        let created = active
            .insert(&txn)
            .await
            .map_err(|e| map_write_error(e, "Group", "name"))?;
        txn.commit().await?;

        Ok(mapper::group_from_entities(created, Vec::new()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;

        entity::Entity::update_many()
            .col_expr(entity::Column::GroupId, Expr::value(Option::<i32>::None))
            .filter(entity::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::group::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let txn = self.db.begin().await?;
        let count = entity::group::Entity::find_by_id(id).count(&txn).await?;
        txn.commit().await?;

        Ok(count > 0)
    }
}
