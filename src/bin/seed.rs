use serde_json::{Value, json};
use wishlist_api::{
    config::AppConfig,
    db::{create_orm_conn, init_schema, reset_db},
    services::{item_service, wishlist_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure the tables exist, then start from empty tables and fresh ids.
    init_schema(&orm).await?;
    reset_db(&orm).await?;

    let state = AppState::new(orm, config.keyword_match);
    seed_wishlists(&state).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_wishlists(state: &AppState) -> anyhow::Result<()> {
    let wishlists: Vec<(Value, Vec<Value>)> = vec![
        (
            json!({ "customer_id": 1, "wishlist_name": "grocery" }),
            vec![
                json!({ "product_id": 1, "name": "toothpaste", "description": "toothpaste for 2" }),
                json!({ "product_id": 2, "name": "toothbrush", "description": "I need one" }),
            ],
        ),
        (
            json!({ "customer_id": 1, "wishlist_name": "beverage" }),
            vec![json!({ "product_id": 3, "name": "coke", "description": "diet, 12 pack" })],
        ),
        (
            json!({ "customer_id": 2, "wishlist_name": "electronics" }),
            vec![json!({ "product_id": 4, "name": "headphones" })],
        ),
    ];

    for (payload, items) in wishlists {
        let created = wishlist_service::create_wishlist(state, payload).await?;
        let id = created
            .wishlist
            .id
            .ok_or_else(|| anyhow::anyhow!("seeded wishlist has no id"))?;
        let count = items.len();
        for item in items {
            item_service::create_item(state, id, item).await?;
        }
        println!(
            "Seeded wishlist {id} '{}' with {count} item(s)",
            created.wishlist.wishlist_name
        );
    }

    Ok(())
}
