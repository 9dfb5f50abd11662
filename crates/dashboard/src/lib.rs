//! Client-side state for the menu catalog dashboard.
//!
//! [`Dashboard`] owns the in-memory [`FoodStore`], the add/edit modal flags
//! and the record being edited. It sends user intents to a
//! [`FoodGateway`](menu_gateway::FoodGateway) and applies confirmed
//! responses back into the store. The [`list`] and [`modals`] modules are
//! the view-facing projections; [`console`] is a line-oriented front-end
//! over all of it.

pub mod console;
pub mod events;
pub mod list;
pub mod modals;
pub mod orchestrator;
pub mod state;
pub mod store;

pub use events::DashboardEvent;
pub use orchestrator::Dashboard;
pub use state::DashboardState;
pub use store::FoodStore;
