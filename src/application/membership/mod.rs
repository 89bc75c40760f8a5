mod member_service;

pub use member_service::{
    MembershipDependencies, delete_member, get_all_members, get_member_by_id,
    get_member_statistics, register_member, search_members_by_name, update_member,
};
