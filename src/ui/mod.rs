pub mod banner;
pub mod hud;
