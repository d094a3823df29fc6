mod view;

pub use view::MaterialDetails;
