pub mod data_card;
pub mod empty_state;
pub mod form_actions;
pub mod page_header;
pub mod select_checkbox;

pub use data_card::DataCard;
pub use empty_state::EmptyState;
pub use form_actions::FormActions;
pub use page_header::PageHeader;
pub use select_checkbox::SelectCheckbox;
