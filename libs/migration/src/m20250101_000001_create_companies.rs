use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len_null(Companies::ReferenceId, 50))
                    .col(string_len(Companies::Name, 255))
                    .col(string_len_null(Companies::ContactPerson, 255))
                    // Unit-separator delimited list
                    .col(string_len(Companies::Work, 1000).default(""))
                    .col(string_len_null(Companies::Status, 50))
                    // Record-separator delimited key/value pairs
                    .col(string_len(Companies::Socials, 1000).default(""))
                    .col(text_null(Companies::DriveLink))
                    .col(timestamp(Companies::CreatedAt))
                    .col(timestamp(Companies::UpdatedAt))
                    .col(string_len_null(Companies::LastUpdatedBy, 255))
                    .to_owned(),
            )
            .await?;

        // NULLs are distinct, so companies without a reference id never collide
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_reference_id")
                    .table(Companies::Table)
                    .col(Companies::ReferenceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    ReferenceId,
    Name,
    ContactPerson,
    Work,
    Status,
    Socials,
    DriveLink,
    CreatedAt,
    UpdatedAt,
    LastUpdatedBy,
}
