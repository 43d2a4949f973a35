use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum CreditTypes {
    Table,
    Id,
    Name,
}

// Reference rows for the ledger; written only here, never at runtime.
const CONTACT_CREDIT_ID: i32 = 1;
const CONTACT_CREDIT_NAME: &str = "contact_credit";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(CreditTypes::Table)
            .columns([CreditTypes::Id, CreditTypes::Name])
            .values_panic([CONTACT_CREDIT_ID.into(), CONTACT_CREDIT_NAME.into()])
            .to_owned();
        manager.exec_stmt(insert).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(CreditTypes::Table)
            .and_where(Expr::col(CreditTypes::Id).eq(CONTACT_CREDIT_ID))
            .to_owned();
        manager.exec_stmt(delete).await?;
        Ok(())
    }
}
