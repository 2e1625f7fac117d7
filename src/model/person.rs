use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, info};

use super::{Job, ModelError};

/// Youngest age at which a job can be assigned.
pub const MIN_WORKING_AGE: i32 = 16;

/// Youngest age at which a person can marry.
pub const MIN_MARRIAGE_AGE: i32 = 18;

/// Shared handle to a [`Person`], held by families and by spouses.
pub type PersonRef = Rc<RefCell<Person>>;

/// An individual with an age-gated job and spouse.
///
/// The job is owned. The spouse is a weak link to another shared [`Person`]; it is set on
/// both sides at once by [`marry`] and never by one side alone.
#[derive(Debug)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: i32,
    job: Option<Job>,
    spouse: Option<Weak<RefCell<Person>>>,
}

impl Person {
    /// Creates a new Person with no job and no spouse.
    ///
    /// # Arguments
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `age` - Age in years (not validated)
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    /// Wraps the person in a shared handle so it can join a family or marry.
    pub fn into_shared(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Changes the age. Existing job and spouse are kept even if the new age would not
    /// allow assigning them.
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Assigns a job, clearing any current job when the person is under
    /// [`MIN_WORKING_AGE`].
    ///
    /// # Errors
    /// [`ModelError::Underage`] when the assignment was rejected.
    pub fn try_set_job(&mut self, job: Job) -> Result<(), ModelError> {
        if self.age < MIN_WORKING_AGE {
            self.job = None;
            return Err(ModelError::Underage {
                name: self.full_name(),
                age: self.age,
                minimum: MIN_WORKING_AGE,
                what: "a job",
            });
        }
        self.job = Some(job);
        Ok(())
    }

    /// Assigns a job. Under [`MIN_WORKING_AGE`] the job is dropped and the person is
    /// left without one.
    pub fn set_job(&mut self, job: Job) {
        if let Err(err) = self.try_set_job(job) {
            debug!(error = %err, "Job assignment rejected");
        }
    }

    /// Removes and returns the current job.
    pub fn take_job(&mut self) -> Option<Job> {
        self.job.take()
    }

    /// The current spouse, if married and the spouse is still alive.
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_married(&self) -> bool {
        self.spouse().is_some()
    }

    /// Builds the fixed-format description:
    /// `[Person: firstName:<f> lastName:<l> age:<a> job:<job|nil> spouse:<name|nil>]`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Person: firstName:{} lastName:{} age:{}",
            self.first_name, self.last_name, self.age
        )?;
        match &self.job {
            Some(job) if self.age > 15 => write!(f, " job:{job}")?,
            _ => f.write_str(" job:nil")?,
        }
        match self.spouse() {
            Some(spouse) if self.age > 17 => write!(f, " spouse:{}", spouse.borrow().first_name)?,
            _ => f.write_str(" spouse:nil")?,
        }
        f.write_str("]")
    }
}

/// Marries `a` and `b`, linking both sides or neither.
///
/// # Errors
/// - [`ModelError::SelfMarriage`] when `a` and `b` are the same person
/// - [`ModelError::AlreadyMarried`] when either side has a spouse
/// - [`ModelError::Underage`] when either side is under [`MIN_MARRIAGE_AGE`]
pub fn try_marry(a: &PersonRef, b: &PersonRef) -> Result<(), ModelError> {
    if Rc::ptr_eq(a, b) {
        return Err(ModelError::SelfMarriage(a.borrow().full_name()));
    }
    for side in [a, b] {
        let person = side.borrow();
        if person.is_married() {
            return Err(ModelError::AlreadyMarried(person.full_name()));
        }
        if person.age < MIN_MARRIAGE_AGE {
            return Err(ModelError::Underage {
                name: person.full_name(),
                age: person.age,
                minimum: MIN_MARRIAGE_AGE,
                what: "marriage",
            });
        }
    }

    a.borrow_mut().spouse = Some(Rc::downgrade(b));
    b.borrow_mut().spouse = Some(Rc::downgrade(a));
    info!(
        spouse1 = %a.borrow().full_name(),
        spouse2 = %b.borrow().full_name(),
        "Married"
    );
    Ok(())
}

/// Marries `a` and `b`. A rejected marriage leaves both sides unchanged.
///
/// Returns whether the marriage took place.
pub fn marry(a: &PersonRef, b: &PersonRef) -> bool {
    match try_marry(a, b) {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "Marriage rejected");
            false
        }
    }
}
