//! Shared UI components

mod button;
mod category_prompt;
mod modal;
mod search_bar;
mod song_list;
mod song_viewer;
mod songbook;
mod text_input;

pub use button::{Button, ButtonVariant, StarButton};
pub use category_prompt::CategoryPrompt;
pub use modal::Modal;
pub use search_bar::{SearchBar, ANY_CATEGORY};
pub use song_list::SongList;
pub use song_viewer::SongViewer;
pub use songbook::SongbookView;
pub use text_input::TextInput;
