use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func, LikeExpr, LockType, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    config::KeywordMatch,
    entity::wishlists::{ActiveModel, Column, Entity as Wishlists, Model},
    models::Wishlist,
    routes::params::WishlistQuery,
};

pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<Model>, DbErr> {
    Wishlists::find_by_id(id).one(conn).await
}

/// Same as [`find_by_id`], but on PostgreSQL the row stays locked until the
/// surrounding transaction ends.
pub async fn find_by_id_for_update<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<Model>, DbErr> {
    let mut finder = Wishlists::find_by_id(id);
    if conn.get_database_backend() == DbBackend::Postgres {
        finder = finder.lock(LockType::Update);
    }
    finder.one(conn).await
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    query: &WishlistQuery,
    keyword_match: KeywordMatch,
) -> Result<Vec<Model>, DbErr> {
    let mut condition = Condition::all();

    if let Some(keyword) = query.keyword() {
        condition = condition.add(keyword_condition(keyword, keyword_match));
    }

    if let Some(customer_id) = query.customer_id {
        condition = condition.add(Column::CustomerId.eq(customer_id));
    }

    Wishlists::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

fn keyword_condition(keyword: &str, keyword_match: KeywordMatch) -> SimpleExpr {
    match keyword_match {
        KeywordMatch::Exact => Column::WishlistName.eq(keyword),
        KeywordMatch::Contains => {
            Expr::col(Column::WishlistName).like(contains_pattern(keyword))
        }
        KeywordMatch::ContainsIgnoreCase => {
            Expr::expr(Func::lower(Expr::col(Column::WishlistName)))
                .like(contains_pattern(&keyword.to_lowercase()))
        }
    }
}

/// `%keyword%`, with `%`, `_` and `\` in the keyword matched literally.
fn contains_pattern(keyword: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    LikeExpr::new(pattern).escape('\\')
}

pub async fn insert<C: ConnectionTrait>(conn: &C, wishlist: &Wishlist) -> Result<Model, DbErr> {
    ActiveModel {
        id: NotSet,
        customer_id: Set(wishlist.customer_id),
        wishlist_name: Set(wishlist.wishlist_name.clone()),
    }
    .insert(conn)
    .await
}

/// Overwrite every mutable column of `existing`; the id is kept.
pub async fn update<C: ConnectionTrait>(
    conn: &C,
    existing: Model,
    wishlist: &Wishlist,
) -> Result<Model, DbErr> {
    let mut active: ActiveModel = existing.into();
    active.customer_id = Set(wishlist.customer_id);
    active.wishlist_name = Set(wishlist.wishlist_name.clone());
    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64, DbErr> {
    let result = Wishlists::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
