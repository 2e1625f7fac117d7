//! Error types for the household model.

use thiserror::Error;

/// Conditions the model can report as values through its checked (`try_*`) operations.
///
/// The unchecked counterparts ([`Money::convert`](crate::model::Money::convert),
/// [`Person::set_job`](crate::model::Person::set_job), [`marry`](crate::model::marry))
/// log these and fall back to a sentinel or a silent drop instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// No exchange rate is defined for the directed currency pair.
    #[error("No exchange rate from {from:?} to {to:?}")]
    UnknownRate { from: String, to: String },

    /// The person is too young for the requested assignment.
    #[error("{name} is {age}, below the minimum age of {minimum} for {what}")]
    Underage {
        name: String,
        age: i32,
        minimum: i32,
        what: &'static str,
    },

    /// The person already has a spouse.
    #[error("{0} is already married")]
    AlreadyMarried(String),

    /// Both sides of the marriage are the same person.
    #[error("{0} cannot marry themselves")]
    SelfMarriage(String),
}
