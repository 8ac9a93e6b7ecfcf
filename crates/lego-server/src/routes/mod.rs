pub mod dates;
pub mod publishers;
pub mod topactions;
