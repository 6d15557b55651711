pub mod copy_state;
pub mod leet_map;
pub mod session;
