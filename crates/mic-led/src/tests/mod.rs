mod config;
mod icon_set;
mod icon_sync;
