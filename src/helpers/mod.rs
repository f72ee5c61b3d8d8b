pub mod handler_404;
pub mod json_list;
pub mod slug;
