//! Database tests against a real PostgreSQL instance
//!
//! Run with `DATABASE_URL` pointing at a server where the test user may
//! create databases, then `cargo test -- --ignored`.

use sqlx::PgPool;
use yacht_site::db::{Database, LocationOrder};
use yacht_site::models::{ArticleDraft, LocationDraft, NewYachtImage, YachtDraft};

// ==================== Test Helpers ====================

fn location_draft(name_en: &str) -> LocationDraft {
    LocationDraft {
        name_en: name_en.to_string(),
        name_ar: format!("{} ar", name_en),
        latitude: Some(29.6),
        longitude: Some(32.3),
        ..LocationDraft::default()
    }
}

fn yacht_draft(name_en: &str, location_id: Option<uuid::Uuid>, featured: bool) -> YachtDraft {
    YachtDraft {
        name_en: name_en.to_string(),
        name_ar: format!("{} ar", name_en),
        features_en: vec!["Cabin".to_string(), "Jacuzzi".to_string()],
        features_ar: vec!["كابينة".to_string()],
        price: Some(1500.0),
        is_featured: featured,
        location_id,
        ..YachtDraft::default()
    }
}

fn image(yacht_id: uuid::Uuid, order_index: i32, is_primary: bool) -> NewYachtImage {
    NewYachtImage {
        yacht_id,
        image_url: format!("https://cdn.example.com/{}/{}.jpg", yacht_id, order_index),
        image_path: format!("{}/{}.jpg", yacht_id, order_index),
        is_primary,
        order_index,
    }
}

// ==================== Locations ====================

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_location_lifecycle(pool: PgPool) {
    let db = Database::from_pool(pool);

    let id = db.create_location(&location_draft("Marina")).await.unwrap();
    let mut draft = location_draft("Marina Bay");
    draft.description_en = Some("Calm water".to_string());
    assert!(db.update_location(id, &draft).await.unwrap());

    let location = db.get_active_location(id).await.unwrap().unwrap();
    assert_eq!(location.name_en, "Marina Bay");
    assert_eq!(location.description_en.as_deref(), Some("Calm water"));

    assert!(db.deactivate_location(id).await.unwrap());
    assert!(db.get_active_location(id).await.unwrap().is_none());
    assert!(db.get_location(id).await.unwrap().is_some());
    assert!(db
        .list_active_locations(LocationOrder::Newest, None)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_locations_ordered_by_name_with_limit(pool: PgPool) {
    let db = Database::from_pool(pool);
    for name in ["Sokhna", "Aqaba", "Hurghada"] {
        db.create_location(&location_draft(name)).await.unwrap();
    }

    let names: Vec<String> = db
        .list_active_locations(LocationOrder::Name, Some(2))
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.name_en)
        .collect();

    assert_eq!(names, vec!["Aqaba", "Hurghada"]);
}

// ==================== Yachts ====================

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_soft_deleted_yacht_hidden_from_public_reads(pool: PgPool) {
    let db = Database::from_pool(pool);
    let location_id = db.create_location(&location_draft("Marina")).await.unwrap();
    let id = db
        .create_yacht(&yacht_draft("Sea Breeze", Some(location_id), true))
        .await
        .unwrap();

    assert_eq!(db.list_featured_yachts(6).await.unwrap().len(), 1);
    assert!(db.deactivate_yacht(id).await.unwrap());

    assert!(db.get_active_yacht(id).await.unwrap().is_none());
    assert!(db.list_active_yachts().await.unwrap().is_empty());
    assert!(db.list_featured_yachts(6).await.unwrap().is_empty());
    assert!(db.list_yachts_in_location(location_id).await.unwrap().is_empty());

    let yacht = db.get_yacht(id).await.unwrap().unwrap();
    assert!(!yacht.is_active);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_featured_yachts_listed_first(pool: PgPool) {
    let db = Database::from_pool(pool);
    db.create_yacht(&yacht_draft("Plain", None, false)).await.unwrap();
    db.create_yacht(&yacht_draft("Star", None, true)).await.unwrap();

    let yachts = db.list_active_yachts().await.unwrap();
    assert_eq!(yachts[0].name_en, "Star");
    assert_eq!(yachts[1].name_en, "Plain");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_yacht_loads_location_and_features(pool: PgPool) {
    let db = Database::from_pool(pool);
    let location_id = db.create_location(&location_draft("Marina")).await.unwrap();
    let id = db
        .create_yacht(&yacht_draft("Sea Breeze", Some(location_id), false))
        .await
        .unwrap();

    let yacht = db.get_active_yacht(id).await.unwrap().unwrap();
    assert_eq!(yacht.features_en, vec!["Cabin", "Jacuzzi"]);
    assert_eq!(yacht.price_currency, "USD");
    assert_eq!(yacht.location.map(|l| l.name_en), Some("Marina".to_string()));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_counts_only_active_yachts(pool: PgPool) {
    let db = Database::from_pool(pool);
    let marina = db.create_location(&location_draft("Marina")).await.unwrap();
    let bay = db.create_location(&location_draft("Bay")).await.unwrap();

    db.create_yacht(&yacht_draft("A", Some(marina), false)).await.unwrap();
    db.create_yacht(&yacht_draft("B", Some(marina), false)).await.unwrap();
    let hidden = db.create_yacht(&yacht_draft("C", Some(bay), false)).await.unwrap();
    db.create_yacht(&yacht_draft("D", None, false)).await.unwrap();
    db.deactivate_yacht(hidden).await.unwrap();

    let counts = db.yacht_counts_by_location().await.unwrap();
    assert_eq!(counts.get(&marina), Some(&2));
    assert_eq!(counts.get(&bay), None);
}

// ==================== Yacht Images ====================

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_images_sorted_and_primary_switch(pool: PgPool) {
    let db = Database::from_pool(pool);
    let id = db.create_yacht(&yacht_draft("Sea Breeze", None, false)).await.unwrap();

    let second = db.add_yacht_image(&image(id, 1, false)).await.unwrap();
    let first = db.add_yacht_image(&image(id, 0, true)).await.unwrap();

    let yacht = db.get_yacht(id).await.unwrap().unwrap();
    let order: Vec<_> = yacht.images.iter().map(|i| i.id).collect();
    assert_eq!(order, vec![first, second]);
    assert_eq!(yacht.thumbnail().map(|i| i.id), Some(first));

    assert!(db.set_primary_image(id, second).await.unwrap());
    let yacht = db.get_yacht(id).await.unwrap().unwrap();
    let primaries: Vec<_> = yacht.images.iter().filter(|i| i.is_primary).map(|i| i.id).collect();
    assert_eq!(primaries, vec![second]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_image_operations_scoped_to_yacht(pool: PgPool) {
    let db = Database::from_pool(pool);
    let id = db.create_yacht(&yacht_draft("A", None, false)).await.unwrap();
    let other = db.create_yacht(&yacht_draft("B", None, false)).await.unwrap();
    let image_id = db.add_yacht_image(&image(id, 0, true)).await.unwrap();

    assert!(!db.set_primary_image(other, image_id).await.unwrap());
    assert!(!db.delete_yacht_image(other, image_id).await.unwrap());

    let yacht = db.get_yacht(id).await.unwrap().unwrap();
    assert!(yacht.images[0].is_primary);

    assert!(db.delete_yacht_image(id, image_id).await.unwrap());
    assert!(db.get_yacht(id).await.unwrap().unwrap().images.is_empty());
}

// ==================== Articles ====================

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn test_article_update_keeps_image_when_none_given(pool: PgPool) {
    let db = Database::from_pool(pool);
    let id = db
        .create_article(&ArticleDraft {
            title_en: "Red Sea guide".to_string(),
            title_ar: "دليل البحر الأحمر".to_string(),
            content_en: "Sunny".to_string(),
            content_ar: "مشمس".to_string(),
            image_url: Some("https://cdn.example.com/a.jpg".to_string()),
            image_path: Some("a.jpg".to_string()),
        })
        .await
        .unwrap();

    let updated = ArticleDraft {
        title_en: "Red Sea guide 2025".to_string(),
        title_ar: "دليل البحر الأحمر".to_string(),
        content_en: "Sunny and calm".to_string(),
        content_ar: "مشمس".to_string(),
        ..ArticleDraft::default()
    };
    assert!(db.update_article(id, &updated).await.unwrap());

    let article = db.get_active_article(id).await.unwrap().unwrap();
    assert_eq!(article.title_en, "Red Sea guide 2025");
    assert_eq!(article.image_url.as_deref(), Some("https://cdn.example.com/a.jpg"));

    assert!(db.deactivate_article(id).await.unwrap());
    assert!(db.list_active_articles().await.unwrap().is_empty());
    assert!(db.get_article(id).await.unwrap().is_some());
}
