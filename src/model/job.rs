use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Working hours per year used to annualize an hourly rate.
pub const ANNUAL_HOURS: f64 = 2000.0;

/// How a job pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JobType {
    /// Pay per hour worked. The rate keeps its fractional part.
    Hourly(f64),
    /// Fixed yearly salary in whole units.
    Salary(i64),
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::Hourly(rate) => write!(f, "Hourly({rate:?})"),
            JobType::Salary(salary) => write!(f, "Salary({salary})"),
        }
    }
}

/// An employment record.
///
/// Raises replace the [`JobType`] payload in place; the job itself is kept.
/// No bounds are enforced, so a negative raise can produce a negative rate or salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    title: String,
    #[serde(rename = "type")]
    kind: JobType,
}

impl Job {
    /// Creates a new Job.
    ///
    /// # Arguments
    /// * `title` - Job title
    /// * `kind` - Hourly rate or yearly salary
    pub fn new(title: impl Into<String>, kind: JobType) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> JobType {
        self.kind
    }

    /// Income for `hours` of work.
    ///
    /// Hourly rates are truncated to whole units before multiplying. A salary is
    /// returned as-is and `hours` is ignored.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.kind {
            JobType::Hourly(rate) => rate as i64 * hours,
            JobType::Salary(salary) => salary,
        }
    }

    /// Yearly income, annualizing hourly rates over [`ANNUAL_HOURS`].
    pub fn annual_income(&self) -> f64 {
        match self.kind {
            JobType::Hourly(rate) => rate * ANNUAL_HOURS,
            JobType::Salary(salary) => salary as f64,
        }
    }

    /// Raises pay by a flat amount.
    ///
    /// Salaries only take the whole part of `amount`.
    pub fn raise_by_amount(&mut self, amount: f64) {
        let raised = match self.kind {
            JobType::Hourly(rate) => JobType::Hourly(rate + amount),
            JobType::Salary(salary) => JobType::Salary(salary + amount as i64),
        };
        self.apply_raise(raised);
    }

    /// Raises pay by a fraction, e.g. `0.1` for ten percent.
    ///
    /// The raised salary is truncated to whole units.
    pub fn raise_by_percent(&mut self, percent: f64) {
        let raised = match self.kind {
            JobType::Hourly(rate) => JobType::Hourly(rate * (1.0 + percent)),
            JobType::Salary(salary) => JobType::Salary((salary as f64 * (1.0 + percent)) as i64),
        };
        self.apply_raise(raised);
    }

    fn apply_raise(&mut self, raised: JobType) {
        debug!(title = %self.title, from = %self.kind, to = %raised, "Raise applied");
        self.kind = raised;
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.kind)
    }
}
