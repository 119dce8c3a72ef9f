use crate::entities::{holiday_searches, prelude::*};
use chrono::NaiveDate;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
    sea_query::{ColumnDef, Table},
};

pub struct SearchRepository {
    conn: DatabaseConnection,
}

impl SearchRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Creates `holiday_searches` if it is missing. `searched_at` is filled by the store.
    pub async fn create_table(&self) -> Result<(), DbErr> {
        use holiday_searches::Column;

        let backend = self.conn.get_database_backend();
        let statement = Table::create()
            .table(HolidaySearches)
            .if_not_exists()
            .col(
                ColumnDef::new(Column::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Column::HolidayName).string().null())
            .col(ColumnDef::new(Column::HolidayDate).date().not_null())
            .col(ColumnDef::new(Column::DaysUntil).integer().not_null())
            .col(
                ColumnDef::new(Column::SearchedAt)
                    .date_time()
                    .not_null()
                    .extra("DEFAULT CURRENT_TIMESTAMP".to_owned()),
            )
            .to_owned();

        self.conn.execute(backend.build(&statement)).await?;
        Ok(())
    }

    pub async fn add(
        &self,
        holiday_name: Option<&str>,
        holiday_date: NaiveDate,
        days_until: i32,
    ) -> Result<i32, DbErr> {
        let active_model = holiday_searches::ActiveModel {
            holiday_name: Set(holiday_name.map(str::to_string)),
            holiday_date: Set(holiday_date),
            days_until: Set(days_until),
            ..Default::default()
        };

        let result = HolidaySearches::insert(active_model)
            .exec(&self.conn)
            .await?;
        Ok(result.last_insert_id)
    }

    pub async fn recent(&self, limit: u64) -> Result<Vec<holiday_searches::Model>, DbErr> {
        HolidaySearches::find()
            .order_by_desc(holiday_searches::Column::SearchedAt)
            .order_by_desc(holiday_searches::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await
    }
}
