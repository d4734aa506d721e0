// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "keyword_rankings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub keyword_id: i32,
    pub project_id: i32,
    pub search_engine: String,
    pub region: String,
    pub device: String,
    pub position: i32,
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub checked_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::keyword::Entity",
        from = "Column::KeywordId",
        to = "super::keyword::Column::Id"
    )]
    Keyword,
}

impl Related<super::keyword::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Keyword.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
