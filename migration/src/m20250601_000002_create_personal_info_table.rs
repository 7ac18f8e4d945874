use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create personal_info table (single row, id pinned to 1)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonalInfo::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .default(1)
                            .check(Expr::col(PersonalInfo::Id).eq(1)),
                    )
                    .col(ColumnDef::new(PersonalInfo::Name).string_len(100).not_null())
                    .col(ColumnDef::new(PersonalInfo::Title).string_len(200).not_null())
                    .col(ColumnDef::new(PersonalInfo::Bio).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::ProfileImage).string_len(255))
                    .col(ColumnDef::new(PersonalInfo::Resume).string_len(255))
                    .col(ColumnDef::new(PersonalInfo::Email).string_len(254).not_null())
                    .col(
                        ColumnDef::new(PersonalInfo::Phone)
                            .string_len(20)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::Location)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::GithubUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::LinkedinUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::TwitterUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::WebsiteUrl)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PersonalInfo::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_personal_info_updated_at
                BEFORE UPDATE ON personal_info
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_personal_info_updated_at ON personal_info",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PersonalInfo {
    Table,
    Id,
    Name,
    Title,
    Bio,
    ProfileImage,
    Resume,
    Email,
    Phone,
    Location,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    WebsiteUrl,
    UpdatedAt,
}
