pub mod bundles;
pub mod interactive;
pub mod quote;
pub mod splits;

pub use bundles::handle_bundles;
pub use interactive::handle_interactive;
pub use quote::{build_request, handle_quote};
pub use splits::{handle_payout, handle_splits};
