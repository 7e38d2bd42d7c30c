mod confine;
mod expand;
mod uri;

pub use confine::Confine;
pub use expand::Expand;
pub use uri::is_uri;
