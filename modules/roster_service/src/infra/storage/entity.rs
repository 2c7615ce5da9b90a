//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Students table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Unique across all students
    #[sea_orm(unique)]
    pub email: String,

    /// Owning group (nullable foreign key)
    pub group_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to groups
    #[sea_orm(
        belongs_to = "group::Entity",
        from = "Column::GroupId",
        to = "group::Column::Id",
        on_delete = "SetNull"
    )]
    Group,
}

impl Related<group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Groups table module
pub mod group {
    use sea_orm::entity::prelude::*;

    /// Groups table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "groups")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Unique across all groups
        #[sea_orm(unique)]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with students
        #[sea_orm(has_many = "super::Entity")]
        Students,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Students.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
