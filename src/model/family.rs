use std::rc::Rc;
use tracing::{debug, info};

use super::{marry, Job, PersonRef};

/// Youngest age at which a member allows the family to have a child.
pub const MIN_PARENT_AGE: i32 = 21;

/// A married couple and their children.
///
/// Members are shared handles; the family does not control their lifetime. Members are
/// only ever appended.
#[derive(Debug)]
pub struct Family {
    members: Vec<PersonRef>,
}

impl Family {
    /// Forms a family from two unmarried people and marries them to each other.
    ///
    /// The members start as `[spouse1, spouse2]`. If the marriage itself is rejected
    /// (one side under the marriage age) the family is still formed with neither side
    /// married.
    ///
    /// # Panics
    /// If either person already has a spouse.
    pub fn new(spouse1: PersonRef, spouse2: PersonRef) -> Self {
        assert!(
            !spouse1.borrow().is_married() && !spouse2.borrow().is_married(),
            "Both spouses must not have a current spouse."
        );
        if !marry(&spouse1, &spouse2) {
            debug!("Family formed without a marriage");
        }
        info!(
            spouse1 = %spouse1.borrow().full_name(),
            spouse2 = %spouse2.borrow().full_name(),
            "Family formed"
        );
        Self {
            members: vec![spouse1, spouse2],
        }
    }

    pub fn members(&self) -> &[PersonRef] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, person: &PersonRef) -> bool {
        self.members.iter().any(|member| Rc::ptr_eq(member, person))
    }

    /// Adds `child` when any current member is at least [`MIN_PARENT_AGE`].
    ///
    /// Returns whether the child was added.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        let eligible = self
            .members
            .iter()
            .any(|member| member.borrow().age() >= MIN_PARENT_AGE);
        if !eligible {
            debug!(child = %child.borrow().full_name(), "No member old enough to have a child");
            return false;
        }
        info!(child = %child.borrow().full_name(), size = self.members.len() + 1, "Child added");
        self.members.push(child);
        true
    }

    /// Sum of every member's [`Job::annual_income`]. Members without a job add nothing.
    pub fn household_income(&self) -> f64 {
        self.members
            .iter()
            .map(|member| member.borrow().job().map_or(0.0, Job::annual_income))
            .sum()
    }
}
