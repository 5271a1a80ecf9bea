pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod filter_form;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod mutation;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
pub mod poller;
pub mod remote_collection;
