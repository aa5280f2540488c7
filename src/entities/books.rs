use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Release order within the owning series. Not the identity.
    pub ordinal: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
    pub cover_image_url: Option<String>,
    pub cover_image: Option<Vec<u8>>,
    pub series_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::series::Entity",
        from = "Column::SeriesId",
        to = "super::series::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Series,
    #[sea_orm(has_many = "super::book_characters::Entity")]
    BookCharacters,
}

impl Related<super::series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Series.def()
    }
}

impl Related<super::book_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookCharacters.def()
    }
}

impl Related<super::characters::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_characters::Relation::Character.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::book_characters::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
