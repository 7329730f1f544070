//! Pure data structures (DTOs) shared by the fraud detection operations.
//!
//! Every record is declared with [`record!`](crate::framework::macros) and
//! implements [`Record`](crate::framework::Record); every enumeration implements
//! [`WireEnum`](crate::framework::WireEnum).

pub mod detector;
pub mod enums;
pub mod external_model;
pub mod ml_model;
pub mod outcome;
pub mod prediction;
pub mod rule;
pub mod variable;

pub use detector::*;
pub use enums::*;
pub use external_model::*;
pub use ml_model::*;
pub use outcome::*;
pub use prediction::*;
pub use rule::*;
pub use variable::*;
