use sea_orm::entity::prelude::*;

/// Balance credited to every account at registration.
pub const DEFAULT_BALANCE: i64 = 1000;

/// A registered user of the bank.
///
/// `password` holds the salted one-way hash in PHC string form, never the
/// plaintext.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    #[sea_orm(default_value = 1000)]
    pub balance: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
