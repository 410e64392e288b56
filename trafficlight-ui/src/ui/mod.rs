pub mod drawing;
pub mod layout;
