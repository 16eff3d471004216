pub mod api;
pub mod colors;
pub mod community;
pub mod event;
pub mod league;
pub mod season;
pub mod team;
pub mod user;
pub mod views;
pub mod vod;

pub use api::ApiStatus;
pub use colors::game_color;
pub use community::*;
pub use event::*;
pub use league::*;
pub use season::*;
pub use team::*;
pub use user::*;
pub use views::*;
pub use vod::*;
