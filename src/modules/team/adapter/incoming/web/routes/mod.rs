mod get_team;
mod manage_team;

pub use get_team::get_team_handler;
pub use manage_team::{
    create_team_member_handler, delete_team_member_handler, patch_team_member_handler,
};
