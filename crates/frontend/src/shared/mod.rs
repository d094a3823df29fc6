pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod entity_cache;
pub mod export;
pub mod icons;
pub mod message;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
