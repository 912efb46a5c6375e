//! MemberRecord entity <- model mappers

use roster_core::entities::{MemberRecord, RecentMember};

use crate::models::{MemberModel, RecentMemberModel};

impl From<MemberModel> for MemberRecord {
    fn from(model: MemberModel) -> Self {
        MemberRecord {
            id: model.id,
            province_id: model.province_id,
            name: model.name,
            birthplace: model.birthplace,
            birth_date: model.birth_date,
            position: model.position,
            faction: model.faction,
            address: model.address,
            remarks: model.remarks,
            age: model.age,
            province: model.province,
            is_chair: model.is_chair,
            is_vice_chair: model.is_vice_chair,
            created_at: model.created_at,
        }
    }
}

impl From<RecentMemberModel> for RecentMember {
    fn from(model: RecentMemberModel) -> Self {
        RecentMember {
            id: model.id,
            name: model.name,
            faction: model.faction,
            position: model.position,
            province: model.province,
        }
    }
}
