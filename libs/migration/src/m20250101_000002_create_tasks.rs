use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Tasks::Title, 255))
                    .col(text_null(Tasks::Description))
                    .col(string_len_null(Tasks::Status, 50))
                    .col(string_len_null(Tasks::Priority, 50))
                    .col(string_len_null(Tasks::AssignedTo, 255))
                    .col(date_null(Tasks::DueDate))
                    .col(timestamp(Tasks::CreatedAt))
                    .col(string_len_null(Tasks::LastUpdatedBy, 255))
                    .col(timestamp(Tasks::LastUpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_due_date")
                    .table(Tasks::Table)
                    .col(Tasks::DueDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    Title,
    Description,
    Status,
    Priority,
    AssignedTo,
    DueDate,
    CreatedAt,
    LastUpdatedBy,
    LastUpdatedAt,
}
