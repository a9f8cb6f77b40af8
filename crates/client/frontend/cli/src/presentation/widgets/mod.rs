pub mod dialogue;
pub mod footer;
pub mod header;
pub mod history;
pub mod inventory;
pub mod menu;
pub mod screen;
