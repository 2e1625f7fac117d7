//! The household domain: [`Money`], [`Job`], [`Person`] and [`Family`].

pub mod error;
pub mod family;
pub mod job;
pub mod money;
pub mod person;

pub use error::*;
pub use family::*;
pub use job::*;
pub use money::*;
pub use person::*;
