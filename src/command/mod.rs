pub mod bez;
pub mod convert;
pub mod interpolate;
pub mod kind;
pub mod path_command;
pub mod path_data;
