use household_model::runtime::setup_tracing;
use household_model::{marry, Family, Job, JobType, Money, Person};
use std::rc::Rc;

/// Full household flow: jobs, marriage through family formation, children and income.
#[test]
fn test_full_household_lifecycle() {
    setup_tracing();

    let ted = Person::new("Ted", "Neward", 45).into_shared();
    let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
    ted.borrow_mut().set_job(Job::new("Guest Lecturer", JobType::Hourly(10.0)));
    charlotte.borrow_mut().set_job(Job::new("Engineer", JobType::Salary(30000)));

    let mut family = Family::new(ted.clone(), charlotte.clone());
    assert_eq!(family.household_income(), 50000.0);
    assert_eq!(
        ted.borrow().describe(),
        "[Person: firstName:Ted lastName:Neward age:45 job:Guest Lecturer (Hourly(10.0)) spouse:Charlotte]"
    );

    // A child is too young for a job until they grow up
    let mike = Person::new("Mike", "Neward", 10).into_shared();
    assert!(family.have_child(mike.clone()));
    mike.borrow_mut().set_job(Job::new("Paper Route", JobType::Hourly(5.0)));
    assert!(mike.borrow().job().is_none());
    assert_eq!(family.household_income(), 50000.0);

    mike.borrow_mut().set_age(16);
    mike.borrow_mut().set_job(Job::new("Paper Route", JobType::Hourly(5.0)));
    assert_eq!(family.household_income(), 60000.0);

    // Raises made through a member show up in the household total
    if let Some(job) = charlotte.borrow_mut().job_mut() {
        job.raise_by_percent(0.1);
    }
    assert_eq!(family.household_income(), 63000.0);

    assert_eq!(family.len(), 3);
    assert!(family.contains(&mike));
}

/// Two teenagers can form a family but cannot marry or have children.
#[test]
fn test_young_couple() {
    setup_tracing();

    let a = Person::new("Romeo", "Montague", 17).into_shared();
    let b = Person::new("Juliet", "Capulet", 16).into_shared();
    let mut family = Family::new(a.clone(), b.clone());

    assert!(!a.borrow().is_married());
    assert!(!b.borrow().is_married());
    assert!(!family.have_child(Person::new("Baby", "Montague", 0).into_shared()));
    assert_eq!(family.len(), 2);
}

/// People married outside a family cannot start one with someone else.
#[test]
#[should_panic(expected = "Both spouses must not have a current spouse.")]
fn test_family_rejects_married_person() {
    let ted = Person::new("Ted", "Neward", 45).into_shared();
    let charlotte = Person::new("Charlotte", "Neward", 45).into_shared();
    assert!(marry(&ted, &charlotte));

    let other = Person::new("Other", "Person", 45).into_shared();
    let _family = Family::new(other, charlotte);
}

/// At age 20 both the job and the spouse are accepted, at 10 neither is.
#[test]
fn test_age_gates() {
    setup_tracing();

    let kid = Person::new("Kid", "Young", 10).into_shared();
    let adult = Person::new("Ted", "Neward", 20).into_shared();
    let partner = Person::new("Charlotte", "Neward", 20).into_shared();

    kid.borrow_mut().set_job(Job::new("Engineer", JobType::Salary(1000)));
    assert!(!marry(&kid, &adult));
    assert!(kid.borrow().job().is_none());
    assert!(kid.borrow().spouse().is_none());

    adult.borrow_mut().set_job(Job::new("Engineer", JobType::Salary(1000)));
    assert!(marry(&adult, &partner));
    assert!(adult.borrow().job().is_some());
    let spouse = adult.borrow().spouse().unwrap();
    assert!(Rc::ptr_eq(&spouse, &partner));
}

/// Salaries converted between currencies keep the table's asymmetry.
#[test]
fn test_income_in_other_currencies() {
    setup_tracing();

    let job = Job::new("Engineer", JobType::Salary(50000));
    let salary = Money::new(job.calculate_income(2000), "USD");

    assert_eq!(salary.convert("GBP"), Money::new(25000, "GBP"));
    assert_eq!(salary.convert("CAN"), Money::new(62500, "CAN"));
    assert_eq!(salary.convert("EUR").convert("USD"), salary);
    assert!(salary.convert("GBP").convert("EUR").is_unconvertible());
}
