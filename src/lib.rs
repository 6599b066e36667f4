pub mod config;
pub mod event;
pub mod favourites;
pub mod http;
pub mod model;
pub mod storage;
pub mod ui;
pub mod util;
