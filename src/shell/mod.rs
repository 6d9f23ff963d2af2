mod menu;
mod session;

pub use menu::{MENU, MenuChoice};
pub use session::Shell;
