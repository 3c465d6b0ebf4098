use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Books::Title).string().not_null())
                    .col(ColumnDef::new(Books::Author).string().not_null())
                    .col(ColumnDef::new(Books::Genre).string().not_null())
                    .col(ColumnDef::new(Books::PublicationDate).date().not_null())
                    .col(ColumnDef::new(Books::Isbn).string().not_null())
                    .col(ColumnDef::new(Books::Description).string().not_null())
                    .col(
                        ColumnDef::new(Books::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // ISBN is a lookup key but deliberately not unique — duplicate rows
        // are resolved by lowest id at query time.
        manager
            .create_index(
                Index::create()
                    .name("idx_books_isbn")
                    .table(Books::Table)
                    .col(Books::Isbn)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    Author,
    Genre,
    PublicationDate,
    Isbn,
    Description,
    Status,
}
