pub mod badge;
pub mod loading_skeleton;
pub mod pagination_controls;
