//! Both sides of the follow relation are read through the single
//! `user_follow` edge table.

use crate::{user, user_follow};
use sea_orm::{Linked, RelationDef, RelationTrait};

/// user -> users that follow them (incoming edges).
pub struct Followers;

impl Linked for Followers {
    type FromEntity = user::Entity;

    type ToEntity = user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            user_follow::Relation::Followed.def().rev(),
            user_follow::Relation::Follower.def(),
        ]
    }
}

/// user -> users they follow (outgoing edges).
pub struct Follows;

impl Linked for Follows {
    type FromEntity = user::Entity;

    type ToEntity = user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            user_follow::Relation::Follower.def().rev(),
            user_follow::Relation::Followed.def(),
        ]
    }
}
