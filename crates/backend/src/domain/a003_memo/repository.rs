use chrono::Utc;
use contracts::domain::a003_memo::aggregate::{Memo, MemoDto};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_memo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub customer_id: Option<i32>,
    /// JSON array of tag ids
    pub tag_ids: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Memo {
    fn from(m: Model) -> Self {
        let tag_ids = serde_json::from_str(&m.tag_ids).unwrap_or_else(|e| {
            tracing::warn!("Memo {} has unreadable tag_ids: {}", m.id, e);
            Vec::new()
        });
        Memo {
            id: m.id,
            title: m.title,
            description: m.description,
            customer_id: m.customer_id,
            tag_ids,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Memo>, DbErr> {
    Ok(Entity::find()
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn insert(db: &DatabaseConnection, dto: MemoDto) -> Result<Memo, DbErr> {
    let tag_ids =
        serde_json::to_string(&dto.tag_ids).map_err(|e| DbErr::Custom(e.to_string()))?;
    let active = ActiveModel {
        id: NotSet,
        title: Set(dto.title.trim().to_string()),
        description: Set(dto
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())),
        customer_id: Set(dto.customer_id),
        tag_ids: Set(tag_ids),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
