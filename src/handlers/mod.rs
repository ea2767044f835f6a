// Handlers module

pub mod chat;
pub mod image;
pub mod ping;
pub mod rejection;
pub mod reset;
pub mod upload;

pub use chat::chat_handler;
pub use image::image_handler;
pub use ping::ping_handler;
pub use rejection::handle_rejection;
pub use reset::reset_handler;
pub use upload::upload_handler;
