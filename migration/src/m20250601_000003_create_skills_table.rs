use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Skills::Proficiency)
                            .double()
                            .not_null()
                            .check(Expr::col(Skills::Proficiency).between(0.0, 10.0)),
                    )
                    .col(
                        ColumnDef::new(Skills::Category)
                            .string_len(50)
                            .not_null()
                            .check(Expr::col(Skills::Category).is_in([
                                "frontend", "backend", "database", "tools", "other",
                            ])),
                    )
                    .col(
                        ColumnDef::new(Skills::Icon)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Skills::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Skills::DisplayOrder).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Skills::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Default listing order and the tech filter both read by name
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_order_name
                ON skills (display_order, name);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_skills_order_name")
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Proficiency,
    Category,
    Icon,
    DisplayOrder,
    IsActive,
}
