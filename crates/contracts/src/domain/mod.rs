pub mod a001_material;
pub mod a002_recipe;
pub mod a003_fixed_cost;
pub mod a004_product;
pub mod a005_label_setting;
pub mod common;
