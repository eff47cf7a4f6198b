pub mod audio;
pub mod camera;
pub mod menu;
pub mod particles;
pub mod plugin;
pub mod ui;
