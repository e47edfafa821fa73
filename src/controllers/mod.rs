mod clientes;
mod state;
pub use clientes::*;
pub use state::*;
