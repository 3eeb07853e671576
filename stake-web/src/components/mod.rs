//! UI Components

pub mod amount_input;
pub mod connect_button;
pub mod navbar;
pub mod status_message;

pub use amount_input::AmountInput;
pub use connect_button::ConnectButton;
pub use navbar::Navbar;
pub use status_message::StatusMessage;
