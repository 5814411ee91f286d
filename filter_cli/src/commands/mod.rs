mod check;
mod describe;
mod kinds;

pub use check::check;
pub use describe::describe;
pub use kinds::list_kinds;
