pub mod duration;
pub mod experience;
pub mod html;
pub mod i18n;
pub mod profile;
pub mod range;
