mod view;

pub use view::FixedCostDetails;
