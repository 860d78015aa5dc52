pub mod play;
pub mod probe;
pub mod track;
