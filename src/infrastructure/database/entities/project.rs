// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub url: String,
    pub is_paused: bool,
    pub owner_id: i32,
    pub created_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::keyword::Entity")]
    Keyword,
}

impl Related<super::keyword::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Keyword.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
