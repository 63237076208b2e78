use crate::catalog;
use crate::models::{
    sort_images, Article, ArticleDraft, Location, LocationDraft, NewYachtImage, Yacht,
    YachtDraft, YachtImage,
};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::collections::HashMap;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

const YACHT_COLUMNS: &str = "id, name_en, name_ar, description_en, description_ar, \
     features_en, features_ar, price, price_currency, is_featured, is_active, location_id, \
     contact_whatsapp, contact_phone, contact_email, google_maps_link, created_at, updated_at";

const LOCATION_COLUMNS: &str = "id, name_en, name_ar, description_en, description_ar, \
     image_url, latitude, longitude, is_active, created_at, updated_at";

const ARTICLE_COLUMNS: &str = "id, title_en, title_ar, content_en, content_ar, \
     image_url, image_path, is_active, created_at, updated_at";

const IMAGE_COLUMNS: &str = "id, yacht_id, image_url, image_path, is_primary, order_index, created_at";

/// Sort order for location lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOrder {
    /// Newest first (home page, locations page)
    Newest,
    /// Alphabetical by English name (dropdowns)
    Name,
}

/// Access to the backend tables.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to Postgres
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        info!("Database migrations applied");
        Ok(())
    }

    // ==================== Locations ====================

    pub async fn list_active_locations(
        &self,
        order: LocationOrder,
        limit: Option<i64>,
    ) -> Result<Vec<Location>> {
        let order_by = match order {
            LocationOrder::Newest => "created_at DESC",
            LocationOrder::Name => "name_en ASC",
        };
        let sql = format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE is_active = TRUE \
             ORDER BY {order_by} LIMIT $1"
        );
        sqlx::query_as::<_, Location>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list locations")
    }

    /// Look up an active location; `None` if missing or soft-deleted.
    pub async fn get_active_location(&self, id: Uuid) -> Result<Option<Location>> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Location>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch location")
    }

    /// Look up a location regardless of its active flag (admin edit).
    pub async fn get_location(&self, id: Uuid) -> Result<Option<Location>> {
        let sql = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch location")
    }

    pub async fn create_location(&self, draft: &LocationDraft) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO locations
                (name_en, name_ar, description_en, description_ar, image_url, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&draft.name_en)
        .bind(&draft.name_ar)
        .bind(&draft.description_en)
        .bind(&draft.description_ar)
        .bind(&draft.image_url)
        .bind(draft.latitude)
        .bind(draft.longitude)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert location")?;

        info!(location_id = %id, "Location created");
        Ok(id)
    }

    /// Returns `false` if no row matched.
    pub async fn update_location(&self, id: Uuid, draft: &LocationDraft) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE locations SET
                name_en = $2, name_ar = $3, description_en = $4, description_ar = $5,
                image_url = $6, latitude = $7, longitude = $8, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.name_en)
        .bind(&draft.name_ar)
        .bind(&draft.description_en)
        .bind(&draft.description_ar)
        .bind(&draft.image_url)
        .bind(draft.latitude)
        .bind(draft.longitude)
        .execute(&self.pool)
        .await
        .context("Failed to update location")?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft delete. Returns `false` if no row matched.
    pub async fn deactivate_location(&self, id: Uuid) -> Result<bool> {
        self.deactivate("locations", id).await
    }

    // ==================== Yachts ====================

    /// Active featured yachts, newest first, with images and location.
    pub async fn list_featured_yachts(&self, limit: i64) -> Result<Vec<Yacht>> {
        let sql = format!(
            "SELECT {YACHT_COLUMNS} FROM yachts
             WHERE is_active = TRUE AND is_featured = TRUE
             ORDER BY created_at DESC LIMIT $1"
        );
        let yachts = sqlx::query_as::<_, Yacht>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list featured yachts")?;
        self.hydrate(yachts).await
    }

    /// All active yachts, featured first then newest.
    pub async fn list_active_yachts(&self) -> Result<Vec<Yacht>> {
        let sql = format!(
            "SELECT {YACHT_COLUMNS} FROM yachts WHERE is_active = TRUE
             ORDER BY is_featured DESC, created_at DESC"
        );
        let yachts = sqlx::query_as::<_, Yacht>(&sql)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list yachts")?;
        self.hydrate(yachts).await
    }

    /// Active yachts at one location, featured first then newest.
    pub async fn list_yachts_in_location(&self, location_id: Uuid) -> Result<Vec<Yacht>> {
        let sql = format!(
            "SELECT {YACHT_COLUMNS} FROM yachts
             WHERE is_active = TRUE AND location_id = $1
             ORDER BY is_featured DESC, created_at DESC"
        );
        let yachts = sqlx::query_as::<_, Yacht>(&sql)
            .bind(location_id)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list yachts for location")?;
        self.hydrate(yachts).await
    }

    /// Number of active yachts per location.
    pub async fn yacht_counts_by_location(&self) -> Result<HashMap<Uuid, usize>> {
        let location_ids: Vec<Option<Uuid>> =
            sqlx::query_scalar("SELECT location_id FROM yachts WHERE is_active = TRUE")
                .fetch_all(&self.pool)
                .await
                .context("Failed to fetch yacht locations")?;
        Ok(catalog::count_by_location(&location_ids))
    }

    /// Look up an active yacht with images and location.
    pub async fn get_active_yacht(&self, id: Uuid) -> Result<Option<Yacht>> {
        let sql = format!("SELECT {YACHT_COLUMNS} FROM yachts WHERE id = $1 AND is_active = TRUE");
        self.fetch_one_yacht(&sql, id).await
    }

    /// Look up a yacht regardless of its active flag (admin edit).
    pub async fn get_yacht(&self, id: Uuid) -> Result<Option<Yacht>> {
        let sql = format!("SELECT {YACHT_COLUMNS} FROM yachts WHERE id = $1");
        self.fetch_one_yacht(&sql, id).await
    }

    async fn fetch_one_yacht(&self, sql: &str, id: Uuid) -> Result<Option<Yacht>> {
        let yacht = sqlx::query_as::<_, Yacht>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch yacht")?;

        match yacht {
            Some(yacht) => Ok(self.hydrate(vec![yacht]).await?.pop()),
            None => Ok(None),
        }
    }

    pub async fn create_yacht(&self, draft: &YachtDraft) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO yachts
                (name_en, name_ar, description_en, description_ar, features_en, features_ar,
                 price, price_currency, is_featured, location_id, contact_whatsapp,
                 contact_phone, contact_email, google_maps_link)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING id",
        )
        .bind(&draft.name_en)
        .bind(&draft.name_ar)
        .bind(&draft.description_en)
        .bind(&draft.description_ar)
        .bind(&draft.features_en)
        .bind(&draft.features_ar)
        .bind(draft.price)
        .bind(&draft.price_currency)
        .bind(draft.is_featured)
        .bind(draft.location_id)
        .bind(&draft.contact_whatsapp)
        .bind(&draft.contact_phone)
        .bind(&draft.contact_email)
        .bind(&draft.google_maps_link)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert yacht")?;

        info!(yacht_id = %id, "Yacht created");
        Ok(id)
    }

    /// Returns `false` if no row matched.
    pub async fn update_yacht(&self, id: Uuid, draft: &YachtDraft) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE yachts SET
                name_en = $2, name_ar = $3, description_en = $4, description_ar = $5,
                features_en = $6, features_ar = $7, price = $8, price_currency = $9,
                is_featured = $10, location_id = $11, contact_whatsapp = $12,
                contact_phone = $13, contact_email = $14, google_maps_link = $15,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.name_en)
        .bind(&draft.name_ar)
        .bind(&draft.description_en)
        .bind(&draft.description_ar)
        .bind(&draft.features_en)
        .bind(&draft.features_ar)
        .bind(draft.price)
        .bind(&draft.price_currency)
        .bind(draft.is_featured)
        .bind(draft.location_id)
        .bind(&draft.contact_whatsapp)
        .bind(&draft.contact_phone)
        .bind(&draft.contact_email)
        .bind(&draft.google_maps_link)
        .execute(&self.pool)
        .await
        .context("Failed to update yacht")?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft delete. Images stay in place. Returns `false` if no row matched.
    pub async fn deactivate_yacht(&self, id: Uuid) -> Result<bool> {
        self.deactivate("yachts", id).await
    }

    // ==================== Yacht Images ====================

    pub async fn add_yacht_image(&self, image: &NewYachtImage) -> Result<Uuid> {
        sqlx::query_scalar(
            "INSERT INTO yacht_images (yacht_id, image_url, image_path, is_primary, order_index)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(image.yacht_id)
        .bind(&image.image_url)
        .bind(&image.image_path)
        .bind(image.is_primary)
        .bind(image.order_index)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert yacht image")
    }

    /// Remove one image row. Returns `false` if it does not belong to the yacht.
    pub async fn delete_yacht_image(&self, yacht_id: Uuid, image_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM yacht_images WHERE id = $1 AND yacht_id = $2")
            .bind(image_id)
            .bind(yacht_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete yacht image")?;
        Ok(result.rows_affected() > 0)
    }

    /// Make one image primary, clearing the previous primary in the same
    /// transaction. Returns `false` if the image does not belong to the yacht.
    pub async fn set_primary_image(&self, yacht_id: Uuid, image_id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        sqlx::query("UPDATE yacht_images SET is_primary = FALSE WHERE yacht_id = $1")
            .bind(yacht_id)
            .execute(&mut *tx)
            .await
            .context("Failed to clear primary image")?;

        let result = sqlx::query(
            "UPDATE yacht_images SET is_primary = TRUE WHERE id = $1 AND yacht_id = $2",
        )
        .bind(image_id)
        .bind(yacht_id)
        .execute(&mut *tx)
        .await
        .context("Failed to set primary image")?;

        if result.rows_affected() == 0 {
            tx.rollback().await.context("Failed to roll back transaction")?;
            return Ok(false);
        }

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(true)
    }

    /// Attach sorted images and joined locations to loaded yachts.
    async fn hydrate(&self, mut yachts: Vec<Yacht>) -> Result<Vec<Yacht>> {
        if yachts.is_empty() {
            return Ok(yachts);
        }

        let yacht_ids: Vec<Uuid> = yachts.iter().map(|y| y.id).collect();
        let location_ids: Vec<Uuid> = yachts.iter().filter_map(|y| y.location_id).collect();

        let images_sql = format!(
            "SELECT {IMAGE_COLUMNS} FROM yacht_images WHERE yacht_id = ANY($1)
             ORDER BY order_index ASC, created_at ASC"
        );
        let locations_sql = format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE id = ANY($1)");

        let (images, locations) = futures::try_join!(
            sqlx::query_as::<_, YachtImage>(&images_sql)
                .bind(&yacht_ids)
                .fetch_all(&self.pool),
            sqlx::query_as::<_, Location>(&locations_sql)
                .bind(&location_ids)
                .fetch_all(&self.pool),
        )
        .context("Failed to load yacht images and locations")?;

        let mut images_by_yacht: HashMap<Uuid, Vec<YachtImage>> = HashMap::new();
        for image in images {
            images_by_yacht.entry(image.yacht_id).or_default().push(image);
        }
        let locations_by_id: HashMap<Uuid, Location> =
            locations.into_iter().map(|l| (l.id, l)).collect();

        for yacht in &mut yachts {
            let mut images = images_by_yacht.remove(&yacht.id).unwrap_or_default();
            sort_images(&mut images);
            yacht.images = images;
            yacht.location = yacht
                .location_id
                .and_then(|id| locations_by_id.get(&id).cloned());
        }

        Ok(yachts)
    }

    // ==================== Articles ====================

    /// Active articles, newest first.
    pub async fn list_active_articles(&self) -> Result<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE is_active = TRUE ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Article>(&sql)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list articles")
    }

    pub async fn get_active_article(&self, id: Uuid) -> Result<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch article")
    }

    /// Look up an article regardless of its active flag (admin edit).
    pub async fn get_article(&self, id: Uuid) -> Result<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch article")
    }

    pub async fn create_article(&self, draft: &ArticleDraft) -> Result<Uuid> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO articles (title_en, title_ar, content_en, content_ar, image_url, image_path)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&draft.title_en)
        .bind(&draft.title_ar)
        .bind(&draft.content_en)
        .bind(&draft.content_ar)
        .bind(&draft.image_url)
        .bind(&draft.image_path)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert article")?;

        info!(article_id = %id, "Article created");
        Ok(id)
    }

    /// Update text fields; the image is replaced only when the draft carries
    /// a new one. Returns `false` if no row matched.
    pub async fn update_article(&self, id: Uuid, draft: &ArticleDraft) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE articles SET
                title_en = $2, title_ar = $3, content_en = $4, content_ar = $5,
                image_url = COALESCE($6, image_url), image_path = COALESCE($7, image_path),
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(&draft.title_en)
        .bind(&draft.title_ar)
        .bind(&draft.content_en)
        .bind(&draft.content_ar)
        .bind(&draft.image_url)
        .bind(&draft.image_path)
        .execute(&self.pool)
        .await
        .context("Failed to update article")?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft delete. Returns `false` if no row matched.
    pub async fn deactivate_article(&self, id: Uuid) -> Result<bool> {
        self.deactivate("articles", id).await
    }

    async fn deactivate(&self, table: &'static str, id: Uuid) -> Result<bool> {
        let sql = format!("UPDATE {table} SET is_active = FALSE, updated_at = NOW() WHERE id = $1");
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to deactivate row in {}", table))?;

        if result.rows_affected() > 0 {
            info!(table, id = %id, "Record deactivated");
        }
        Ok(result.rows_affected() > 0)
    }
}
