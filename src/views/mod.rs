mod home;
mod overlay;
mod shade;
