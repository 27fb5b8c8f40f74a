//! Random test data for gateway requests.
//!
//! Names are drawn from small built-in lists; emails are prefixed with the
//! current timestamp and a counter so that every call produces a unique address,
//! which the gateway requires for new users.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand::seq::IndexedRandom;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Purchase categories imitating what a user spends money on.
pub const CATEGORIES: &[&str] = &[
    "gas",
    "taxi",
    "tolls",
    "water",
    "beauty",
    "mobile",
    "travel",
    "parking",
    "catalog",
    "internet",
    "satellite",
    "education",
    "government",
    "healthcare",
    "restaurants",
    "electricity",
    "supermarkets",
];

static EMAIL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Random data generator.
///
/// Stateless: every method grabs the thread-local RNG, so a `Fake` can be used
/// from any task without holding an RNG across an `.await`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fake;

/// Shared instance, mirroring how the clients use a single generator.
pub const FAKE: Fake = Fake;

impl Fake {
    /// Pick a random element, e.g. a random enum variant from `&[A, B, C]`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn pick<T: Copy>(&self, values: &[T]) -> T {
        *values
            .choose(&mut rand::rng())
            .expect("cannot pick from an empty list")
    }

    /// Unique email: `<unix time>.<n>.<first>.<last>@<domain>`.
    pub fn email(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        let n = EMAIL_COUNTER.fetch_add(1, Ordering::Relaxed);

        format!(
            "{now:.6}.{n}.{}.{}@{}",
            self.first_name().to_lowercase(),
            self.last_name().to_lowercase(),
            self.pick(EMAIL_DOMAINS)
        )
    }

    pub fn category(&self) -> String {
        self.pick(CATEGORIES).to_string()
    }

    pub fn last_name(&self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    pub fn first_name(&self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    pub fn middle_name(&self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    /// Phone number like `+1-555-123-4567`.
    pub fn phone_number(&self) -> String {
        let mut rng = rand::rng();
        format!(
            "+1-{:03}-{:03}-{:04}",
            rng.random_range(200..1000),
            rng.random_range(100..1000),
            rng.random_range(0..10000)
        )
    }

    /// Random float in `start..=end` rounded to two decimals.
    pub fn float(&self, start: u32, end: u32) -> f64 {
        let cents = rand::rng().random_range(start as u64 * 100..=end as u64 * 100);
        cents as f64 / 100.0
    }

    /// Any amount from 1 to 1000.
    pub fn amount(&self) -> f64 {
        self.float(1, 1000)
    }

    /// Digits-only string of the given length (card numbers, CVV, PIN).
    pub fn digits(&self, len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_are_unique() {
        let a = FAKE.email();
        let b = FAKE.email();

        assert_ne!(a, b);
        assert!(a.contains('@'));
    }

    #[test]
    fn amount_stays_in_range_with_two_decimals() {
        for _ in 0..200 {
            let amount = FAKE.amount();
            assert!((1.0..=1000.0).contains(&amount));
            assert!(((amount * 100.0).round() - amount * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn category_comes_from_the_known_list() {
        let category = FAKE.category();
        assert!(CATEGORIES.contains(&category.as_str()));
    }

    #[test]
    fn digits_have_requested_length() {
        let number = FAKE.digits(16);
        assert_eq!(number.len(), 16);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }
}
