mod footer_bar;
mod input;
mod menu_list;
mod status_bar;

pub use footer_bar::{FooterBar, FooterBarStyle, KeyHint};
pub use input::{TextInput, TextInputView};
pub use menu_list::{MenuList, MenuState};
pub use status_bar::{StatusBar, StatusBarView, StatusLevel};
