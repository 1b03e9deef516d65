pub mod banner;

pub use banner::{Screen, TerminalSurface};
