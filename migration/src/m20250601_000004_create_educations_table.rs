use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Degree).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Educations::FieldOfStudy)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Educations::StartDate).date().not_null())
                    .col(ColumnDef::new(Educations::EndDate).date())
                    .col(
                        ColumnDef::new(Educations::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Educations::Gpa).double())
                    .col(
                        ColumnDef::new(Educations::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Educations::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // About page lists education newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_educations_start_date
                ON educations (start_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Description,
    Gpa,
    IsCurrent,
    DisplayOrder,
}
