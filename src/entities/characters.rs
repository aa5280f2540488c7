use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_characters::Entity")]
    BookCharacters,
}

impl Related<super::book_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookCharacters.def()
    }
}

impl Related<super::books::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_characters::Relation::Book.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::book_characters::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
