mod excitement;
mod food;
mod invitation;
mod movie;
mod schedule;

pub use excitement::ask_excitement;
pub use food::ask_food;
pub use invitation::ask_invitation;
pub use movie::ask_movie;
pub use schedule::ask_schedule;
