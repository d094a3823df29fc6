//! Recipe details form
//!
//! - view_model.rs: form state, material rows, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::RecipeDetails;
pub use view_model::RecipeDetailsViewModel;
