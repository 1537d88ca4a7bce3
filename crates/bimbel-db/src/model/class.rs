use diesel::{pg::Pg, prelude::*};

use crate::db::schema;
use crate::model::package::BimbelPackage;

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::order)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(BimbelPackage, foreign_key = package_id))]
pub struct Order {
    pub id: uuid::Uuid,
    pub package_id: uuid::Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = schema::class)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct Class {
    pub id: uuid::Uuid,
    pub order_id: uuid::Uuid,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
