use chrono::Utc;
use contracts::domain::a001_customer::aggregate::Customer;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::shared::uploads::UploadStore;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_path: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            logo_url: m.logo_path.as_deref().map(UploadStore::public_url),
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Validated values of a new customer
#[derive(Debug, Clone, Default)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub logo_path: Option<String>,
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Customer>, DbErr> {
    let mut items: Vec<Customer> = Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(items)
}

pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    Ok(Entity::find_by_id(id).one(db).await?.is_some())
}

pub async fn insert(db: &DatabaseConnection, new: NewCustomer) -> Result<Customer, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(new.name),
        email: Set(new.email),
        phone: Set(new.phone),
        logo_path: Set(new.logo_path),
        created_at: Set(Some(Utc::now())),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}
