//! Plausible but fictitious field values. Word lists are small on purpose;
//! variety comes from combining them.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aditi", "Amelia", "Arjun", "Carlos", "Chen", "Daniel", "Diya", "Elena", "Farah",
    "Gabriel", "Hana", "Ishaan", "Jasmine", "Kabir", "Laura", "Mei", "Meera", "Nikhil", "Olivia",
    "Priya", "Rahul", "Rosa", "Sanjay", "Sara", "Tanvi", "Vikram", "Wei", "Yusuf", "Zoya",
];

const LAST_NAMES: &[&str] = &[
    "Agarwal", "Banerjee", "Brown", "Chopra", "Das", "Fernandes", "Garcia", "Gupta", "Iyer",
    "Joshi", "Kapoor", "Khan", "Li", "Lopez", "Martin", "Mehta", "Menon", "Nair", "Patel",
    "Reddy", "Rossi", "Shah", "Singh", "Smith", "Verma", "Wang",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

const STREET_NAMES: &[&str] = &[
    "Park Street", "MG Road", "Church Lane", "Lake View Road", "Station Road", "Hill Crescent",
    "Market Street", "Temple Road", "Riverside Drive", "Garden Avenue", "Nehru Marg",
];

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bengaluru", "Hyderabad", "Chennai", "Kolkata", "Pune", "Jaipur",
    "Ahmedabad", "Lucknow", "Kochi", "Chandigarh", "Indore", "Goa",
];

const COMPANY_WORDS: &[&str] = &[
    "Spice", "Golden", "Royal", "Urban", "Masala", "Tandoor", "Dragon", "Olive", "Saffron",
    "Fiesta", "Bamboo", "Lotus", "Copper", "Harbor",
];

const COMPANY_SUFFIXES: &[&str] = &["Kitchen", "House", "Bistro", "Eatery", "Grill", "Diner", "Cafe"];

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

pub fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        rng.gen_range(1..100),
        pick(rng, EMAIL_DOMAINS)
    )
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+91 {}{:04} {:05}",
        rng.gen_range(6..=9),
        rng.gen_range(0..10_000),
        rng.gen_range(0..100_000)
    )
}

pub fn city<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {}, {} {}",
        rng.gen_range(1..500),
        pick(rng, STREET_NAMES),
        pick(rng, CITIES),
        rng.gen_range(110_000..=999_999)
    )
}

pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, COMPANY_WORDS), pick(rng, COMPANY_SUFFIXES))
}

/// A date between January 1st of the current decade and `today`.
pub fn date_this_decade<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let decade_start = NaiveDate::from_ymd_opt(today.year() - today.year().rem_euclid(10), 1, 1)
        .unwrap_or(today);
    let span = (today - decade_start).num_days().max(0);
    decade_start + Duration::days(rng.gen_range(0..=span))
}

/// A timestamp with whole seconds between January 1st of the current year
/// and `now`.
pub fn date_time_this_year<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NaiveDateTime {
    let year_start = NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(now);
    let span = (now - year_start).num_seconds().max(0);
    year_start + Duration::seconds(rng.gen_range(0..=span))
}
