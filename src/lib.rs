#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Household Model
//!
//! > **Money, jobs, people and families, with the arithmetic and the age rules exact.**
//!
//! This crate is a small in-memory domain model. There is no persistence and no
//! concurrency: every operation is a plain synchronous method call.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Three failure policies
//!
//! The model deliberately reports problems in three different ways:
//! - **Silent rejection**: assigning a job under 16 or marrying under 18 simply does not happen.
//! - **Sentinel value**: converting between currencies with no known rate returns
//!   [`Money::unconvertible`], i.e. `Money(0, "")`.
//! - **Panic**: forming a [`Family`] from someone who is already married is a programming error.
//!
//! Each silent or sentinel operation also has a checked `try_*` twin returning
//! [`ModelError`], so callers that care can see why something was refused.
//!
//! ### Shared people
//!
//! A [`Person`] is shared between a [`Family`] and a spouse, so people live behind a
//! [`PersonRef`] (`Rc<RefCell<Person>>`). Spouse links are weak and are only ever set in
//! pairs by [`marry`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Model ([`model`])
//! - [`Money`]: immutable amount + currency, conversion along a fixed rate table.
//! - [`Job`]: hourly or salaried pay, income and raises.
//! - [`Person`]: age-gated job and spouse, fixed-format [`Person::describe`].
//! - [`Family`]: the couple plus children, child eligibility and household income.
//!
//! ### 2. Observability ([`runtime`])
//! - [`setup_tracing`](runtime::setup_tracing) installs a `RUST_LOG`-driven subscriber.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use household_model::{Family, Job, JobType, Person};
//!
//! let ted = Person::new("Ted", "Neward", 45).into_shared();
//! let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
//! ted.borrow_mut().set_job(Job::new("Janitor", JobType::Hourly(10.0)));
//! charlotte.borrow_mut().set_job(Job::new("Engineer", JobType::Salary(30000)));
//!
//! let family = Family::new(ted, charlotte);
//! assert_eq!(family.household_income(), 50000.0);
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=debug cargo test
//! ```

pub mod model;
pub mod runtime;

pub use model::*;
