mod view;
mod view_model;

pub use view::LabelSettingDetails;
pub use view_model::LabelSettingForm;
