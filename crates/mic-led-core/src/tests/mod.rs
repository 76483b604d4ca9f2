mod menu;
mod support;
