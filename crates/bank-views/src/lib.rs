//! Console screens for the banking API
//!
//! A path is routed to a [`View`]; the view fetches through
//! [`bank_client::ApiClient`], keeps its state in one of the generic
//! holders from [`resource`] and renders a text [`Screen`].
//!
//! ```rust,ignore
//! let screen = bank_views::open(&client, "/profile/accounts/42").await;
//! println!("{}", screen);
//! ```

pub mod cards;
pub mod messages;
pub mod render;
pub mod resource;
pub mod router;
pub mod state;
pub mod views;

pub use messages::MessageCatalog;
pub use render::{Card, Screen};
pub use resource::{FormView, ListView, ResourceView};
pub use router::Route;
pub use state::{LoadingFlag, LoadingGuard, ViewState};
pub use views::{open, view_for, View};
