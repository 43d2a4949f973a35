use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    IsActive,
    LastLogin,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CreditTypes {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserCredits {
    Table,
    Id,
    UserId,
    CreditTypeId,
    Amount,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CreditTransactions {
    Table,
    Id,
    UserId,
    CreditTypeId,
    TransactionType,
    Amount,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Records {
    Table,
    Id,
    UserId,
    StartTime,
    EndTime,
    Title,
    Note,
    Focus,
    Point,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RecordTemplates {
    Table,
    Id,
    UserId,
    DefaultTitle,
    DefaultFocus,
    DefaultPoint,
    DefaultNote,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    UserId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PointTransactions {
    Table,
    Id,
    Amount,
    Reason,
    FromUserId,
    ToUserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TalentQueries {
    Table,
    Id,
    UserId,
    NatureLanguageQuery,
    StructuredQuery,
    QueryResult,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Talents {
    Table,
    Id,
    ExternalId,
    Name,
    FirstName,
    LastName,
    Title,
    Url,
    Location,
    Industry,
    Summary,
    Country,
    LogoUrl,
    ConnectionsCount,
    ExperienceCount,
    Profile,
    CreatedAt,
}

fn created_at(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .default(Expr::cust("NOW()"))
        .null()
        .take()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Username).string_len(250).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(250)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(250).not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::LastLogin).timestamp_with_time_zone().null())
                    .col(&mut created_at(Users::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CreditTypes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CreditTypes::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(CreditTypes::Name).string_len(100).not_null())
                    .col(&mut created_at(CreditTypes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserCredits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserCredits::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserCredits::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserCredits::CreditTypeId).integer().not_null())
                    .col(ColumnDef::new(UserCredits::Amount).big_integer().not_null())
                    .col(&mut created_at(UserCredits::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_credits_user_id")
                            .from(UserCredits::Table, UserCredits::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_credits_credit_type_id")
                            .from(UserCredits::Table, UserCredits::CreditTypeId)
                            .to(CreditTypes::Table, CreditTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // one balance row per (user, credit type); grants upsert on this key
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_user_credits_user_credit_type")
                    .table(UserCredits::Table)
                    .col(UserCredits::UserId)
                    .col(UserCredits::CreditTypeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CreditTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CreditTransactions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CreditTransactions::UserId).uuid().not_null())
                    .col(ColumnDef::new(CreditTransactions::CreditTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(CreditTransactions::TransactionType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CreditTransactions::Amount).big_integer().not_null())
                    .col(&mut created_at(CreditTransactions::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credit_transactions_user_id")
                            .from(CreditTransactions::Table, CreditTransactions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_credit_transactions_credit_type_id")
                            .from(CreditTransactions::Table, CreditTransactions::CreditTypeId)
                            .to(CreditTypes::Table, CreditTypes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("ix_credit_transactions_user_credit_type")
                    .table(CreditTransactions::Table)
                    .col(CreditTransactions::UserId)
                    .col(CreditTransactions::CreditTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Records::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Records::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Records::UserId).uuid().not_null())
                    .col(ColumnDef::new(Records::StartTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Records::EndTime).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Records::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Records::Note).text().null())
                    .col(ColumnDef::new(Records::Focus).integer().not_null())
                    .col(ColumnDef::new(Records::Point).integer().not_null())
                    .col(&mut created_at(Records::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_records_user_id")
                            .from(Records::Table, Records::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecordTemplates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RecordTemplates::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(RecordTemplates::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(RecordTemplates::DefaultTitle)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RecordTemplates::DefaultFocus).integer().not_null())
                    .col(ColumnDef::new(RecordTemplates::DefaultPoint).integer().not_null())
                    .col(ColumnDef::new(RecordTemplates::DefaultNote).text().null())
                    .col(&mut created_at(RecordTemplates::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_record_templates_user_id")
                            .from(RecordTemplates::Table, RecordTemplates::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tags::UserId).uuid().not_null())
                    .col(ColumnDef::new(Tags::Name).string_len(100).not_null())
                    .col(&mut created_at(Tags::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tags_user_id")
                            .from(Tags::Table, Tags::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PointTransactions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PointTransactions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PointTransactions::Amount).big_integer().not_null())
                    .col(ColumnDef::new(PointTransactions::Reason).string_len(255).null())
                    .col(ColumnDef::new(PointTransactions::FromUserId).uuid().not_null())
                    .col(ColumnDef::new(PointTransactions::ToUserId).uuid().not_null())
                    .col(&mut created_at(PointTransactions::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_transactions_from_user_id")
                            .from(PointTransactions::Table, PointTransactions::FromUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_transactions_to_user_id")
                            .from(PointTransactions::Table, PointTransactions::ToUserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TalentQueries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TalentQueries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TalentQueries::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(TalentQueries::NatureLanguageQuery)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TalentQueries::StructuredQuery).json_binary().null())
                    .col(ColumnDef::new(TalentQueries::QueryResult).json_binary().null())
                    .col(&mut created_at(TalentQueries::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talent_queries_user_id")
                            .from(TalentQueries::Table, TalentQueries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Talents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Talents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Talents::ExternalId).string_len(100).not_null())
                    .col(ColumnDef::new(Talents::Name).string().null())
                    .col(ColumnDef::new(Talents::FirstName).string().null())
                    .col(ColumnDef::new(Talents::LastName).string().null())
                    .col(ColumnDef::new(Talents::Title).string().null())
                    .col(ColumnDef::new(Talents::Url).string().null())
                    .col(ColumnDef::new(Talents::Location).string().null())
                    .col(ColumnDef::new(Talents::Industry).string().null())
                    .col(ColumnDef::new(Talents::Summary).text().null())
                    .col(ColumnDef::new(Talents::Country).string().null())
                    .col(ColumnDef::new(Talents::LogoUrl).string().null())
                    .col(ColumnDef::new(Talents::ConnectionsCount).integer().null())
                    .col(ColumnDef::new(Talents::ExperienceCount).integer().null())
                    .col(ColumnDef::new(Talents::Profile).json_binary().null())
                    .col(&mut created_at(Talents::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_talents_external_id")
                    .table(Talents::Table)
                    .col(Talents::ExternalId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Table::drop().table(Talents::Table).to_owned(),
            Table::drop().table(TalentQueries::Table).to_owned(),
            Table::drop().table(PointTransactions::Table).to_owned(),
            Table::drop().table(Tags::Table).to_owned(),
            Table::drop().table(RecordTemplates::Table).to_owned(),
            Table::drop().table(Records::Table).to_owned(),
            Table::drop().table(CreditTransactions::Table).to_owned(),
            Table::drop().table(UserCredits::Table).to_owned(),
            Table::drop().table(CreditTypes::Table).to_owned(),
            Table::drop().table(Users::Table).to_owned(),
        ] {
            manager.drop_table(table).await?;
        }
        Ok(())
    }
}
