use chrono::Utc;
use contracts::domain::a002_tag::aggregate::Tag;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryFilter, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tag {
    fn from(m: Model) -> Self {
        Tag {
            id: m.id,
            name: m.name,
            color: m.color,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Tag>, DbErr> {
    let mut items: Vec<Tag> = Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(items)
}

/// Case-insensitive lookup by name
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Tag>, DbErr> {
    let needle = name.trim().to_lowercase();
    Ok(list_all(db)
        .await?
        .into_iter()
        .find(|t| t.name.to_lowercase() == needle))
}

/// Ids among `ids` that have no row
pub async fn missing_ids(db: &DatabaseConnection, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let found: Vec<i32> = Entity::find()
        .filter(Column::Id.is_in(ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();
    Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
}

pub async fn insert(
    db: &DatabaseConnection,
    name: String,
    color: Option<String>,
) -> Result<Tag, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(name),
        color: Set(color),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
