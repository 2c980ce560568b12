pub mod layout;
pub mod login;
pub mod profile_settings;
pub mod property;
pub mod property_selector;
pub mod public_help;

pub use layout::UnifiedLayout;
pub use login::Login;
pub use profile_settings::ProfileSettings;
pub use property::{PropertyPage, RoomInventory};
pub use property_selector::PropertySelector;
pub use public_help::PublicHelp;
