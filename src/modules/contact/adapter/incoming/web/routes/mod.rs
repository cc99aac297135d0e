mod manage_messages;
mod submit_contact;

pub use manage_messages::{delete_message_handler, get_messages_handler, patch_message_handler};
pub use submit_contact::{
    __path_submit_contact_handler, submit_contact_handler, ContactRequestDto,
};
