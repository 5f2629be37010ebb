pub mod rv_timer;
