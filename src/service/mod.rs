pub mod state;

pub use state::SharedState;
