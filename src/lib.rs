pub mod clock;
pub mod date_to_string;
pub mod stamp;
