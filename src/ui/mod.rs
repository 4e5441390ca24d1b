//! egui rendering of the current [`ViewModel`](crate::view::ViewModel).
//! Widgets read the state and queue [`DashboardEvent`](crate::state::DashboardEvent)s;
//! nothing here mutates state.

pub mod overview;
pub mod panels;
pub mod plot;
