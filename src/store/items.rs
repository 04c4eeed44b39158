use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    entity::items::{ActiveModel, Column, Entity as Items, Model},
    models::Item,
    routes::params::ItemQuery,
};

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
    Items::find_by_id(id).one(conn).await
}

/// Same as [`find_by_id`], but on PostgreSQL the row stays locked until the
/// surrounding transaction ends.
pub async fn find_by_id_for_update<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<Model>, DbErr> {
    let mut finder = Items::find_by_id(id);
    if conn.get_database_backend() == DbBackend::Postgres {
        finder = finder.lock(LockType::Update);
    }
    finder.one(conn).await
}

pub async fn list<C: ConnectionTrait>(conn: &C, query: &ItemQuery) -> Result<Vec<Model>, DbErr> {
    let mut condition = Condition::all();
    if let Some(name) = query.name.as_ref().filter(|n| !n.is_empty()) {
        condition = condition.add(Column::Name.eq(name.as_str()));
    }

    Items::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

pub async fn list_by_wishlist<C: ConnectionTrait>(
    conn: &C,
    wishlist_id: i32,
) -> Result<Vec<Model>, DbErr> {
    Items::find()
        .filter(Column::WishlistId.eq(wishlist_id))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait>(conn: &C, item: &Item) -> Result<Model, DbErr> {
    ActiveModel {
        id: NotSet,
        wishlist_id: Set(item.wishlist_id),
        product_id: Set(item.product_id),
        name: Set(item.name.clone()),
        description: Set(item.description.clone()),
    }
    .insert(conn)
    .await
}

/// Overwrite every mutable column of `existing`, including its owner; the id
/// is kept.
pub async fn update<C: ConnectionTrait>(
    conn: &C,
    existing: Model,
    item: &Item,
) -> Result<Model, DbErr> {
    let mut active: ActiveModel = existing.into();
    active.wishlist_id = Set(item.wishlist_id);
    active.product_id = Set(item.product_id);
    active.name = Set(item.name.clone());
    active.description = Set(item.description.clone());
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
    let result = Items::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}

pub async fn delete_by_wishlist<C: ConnectionTrait>(
    conn: &C,
    wishlist_id: i32,
) -> Result<u64, DbErr> {
    let result = Items::delete_many()
        .filter(Column::WishlistId.eq(wishlist_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
