/// A tenant of the forum, identified by its domain.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunityParam {
    pub id: i32,
    pub name: String,
    pub domain: String,
}

impl CommunityParam {
    pub fn from_entity(entity: entity::community::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            domain: entity.domain,
        }
    }
}
