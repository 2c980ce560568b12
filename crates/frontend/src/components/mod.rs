pub mod spinner;

pub use spinner::LoadingSpinner;
