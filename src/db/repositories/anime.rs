use crate::entities::anime;
use crate::models::anime::{Anime, AnimeFields};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

pub struct AnimeRepository {
    conn: DatabaseConnection,
}

impl AnimeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: anime::Model) -> Anime {
        Anime {
            id: model.id,
            name: model.name,
            author: model.author,
            episodes: model.episodes,
        }
    }

    pub async fn insert(&self, fields: &AnimeFields) -> anyhow::Result<i32> {
        let active_model = anime::ActiveModel {
            name: Set(fields.name.clone()),
            author: Set(fields.author.clone()),
            episodes: Set(fields.episodes),
            created: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let inserted = active_model.insert(&self.conn).await?;

        info!("Added anime: {} (id {})", inserted.name, inserted.id);
        Ok(inserted.id)
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<Anime>> {
        let result = anime::Entity::find_by_id(id).one(&self.conn).await?;

        Ok(result.map(Self::map_model))
    }

    /// Listing order is creation time ascending; ties fall back to id so
    /// rows inserted within the same timestamp stay in insertion order.
    pub async fn list_all(&self) -> anyhow::Result<Vec<Anime>> {
        let rows = anime::Entity::find()
            .order_by_asc(anime::Column::Created)
            .order_by_asc(anime::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Updating a missing id is a silent no-op: the affected-row count is
    /// deliberately not checked.
    pub async fn update(&self, id: i32, fields: &AnimeFields) -> anyhow::Result<()> {
        anime::Entity::update_many()
            .col_expr(
                anime::Column::Name,
                sea_orm::sea_query::Expr::value(fields.name.clone()),
            )
            .col_expr(
                anime::Column::Author,
                sea_orm::sea_query::Expr::value(fields.author.clone()),
            )
            .col_expr(
                anime::Column::Episodes,
                sea_orm::sea_query::Expr::value(fields.episodes),
            )
            .filter(anime::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        info!("Updated anime {}", id);
        Ok(())
    }

    pub async fn remove(&self, id: i32) -> anyhow::Result<bool> {
        let result = anime::Entity::delete_by_id(id).exec(&self.conn).await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed anime with ID: {}", id);
        }
        Ok(removed)
    }
}
