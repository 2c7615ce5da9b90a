//! Database migrations for the roster service
//!
//! All migrations share this file, so each one names itself explicitly.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_groups::Migration),
            Box::new(m20250301_000002_create_students::Migration),
        ]
    }
}

mod m20250301_000001_create_groups {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_groups"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Groups::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Groups::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Groups::Name).string().not_null().unique_key())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Groups::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Groups {
        Table,
        Id,
        Name,
    }
}

mod m20250301_000002_create_students {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_students"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Students::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Students::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Students::Name).string().not_null())
                        .col(ColumnDef::new(Students::Email).string().not_null().unique_key())
                        .col(ColumnDef::new(Students::GroupId).integer().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_students_group_id")
                                .from(Students::Table, Students::GroupId)
                                .to(Groups::Table, Groups::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_students_name")
                        .table(Students::Table)
                        .col(Students::Name)
                        .to_owned(),
                )
                .await?;

            // Group.students is computed by this lookup
            manager
                .create_index(
                    Index::create()
                        .name("idx_students_group_id")
                        .table(Students::Table)
                        .col(Students::GroupId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Students::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Students {
        Table,
        Id,
        Name,
        Email,
        GroupId,
    }

    #[derive(DeriveIden)]
    enum Groups {
        Table,
        Id,
    }
}
