pub mod config;
pub mod envelope;
pub mod error;
pub mod exchange;
pub mod guard;
pub mod outcome;
pub mod responder;

pub use config::Config;
pub use envelope::Envelope;
pub use error::{ConfigError, DecodeError, ExchangeError};
pub use exchange::{Exchange, HttpExchange};
pub use guard::{guard, Guard};
pub use outcome::Outcome;
pub use responder::Responder;
