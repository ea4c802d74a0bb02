//! Core data model types.
//!
//! Ingestion produces a [`Roster`]: an ordered, read-only sequence of [`Employee`] records whose
//! salaries are held as exact decimal [`Salary`] values.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of fractional decimal digits a [`Salary`] holds exactly.
pub const SALARY_MAX_SCALE: u32 = 38;

/// One whole unit, in fractional units of `10^-SALARY_MAX_SCALE`.
const FRAC_ONE: u128 = 10u128.pow(SALARY_MAX_SCALE);
const FRAC_PER_CENT: u128 = FRAC_ONE / 100;

/// A non-negative exact decimal amount.
///
/// The whole part and the fraction are kept separately, the fraction as an integer count of
/// `10^-SALARY_MAX_SCALE` units, so any salary written with up to [`SALARY_MAX_SCALE`] fractional
/// digits is stored and printed back without loss. Field order gives the numeric ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Salary {
    whole: u64,
    frac: u128,
}

impl Salary {
    /// Zero salary.
    pub const ZERO: Salary = Salary { whole: 0, frac: 0 };

    /// A salary with no fractional part.
    pub const fn from_whole(whole: u64) -> Self {
        Self { whole, frac: 0 }
    }

    /// Integer part.
    pub const fn whole(self) -> u64 {
        self.whole
    }

    // Saturates at `u64::MAX` whole units.
    fn from_cents(cents: u128) -> Self {
        match u64::try_from(cents / 100) {
            Ok(whole) => Self {
                whole,
                frac: (cents % 100) * FRAC_PER_CENT,
            },
            Err(_) => Self::from_whole(u64::MAX),
        }
    }

    /// Round to two decimal places using round-half-even.
    pub fn round_to_cents(self) -> Self {
        let cents = self.frac / FRAC_PER_CENT;
        let half = (2 * (self.frac % FRAC_PER_CENT)).cmp(&FRAC_PER_CENT);
        Self::from_cents(u128::from(self.whole) * 100 + round_half_even(cents, half))
    }

    /// Display rounded to two places with trailing fractional zeros dropped
    /// (`46666.67`, `1234.5`, `50000`).
    pub fn rounded(self) -> RoundedSalary {
        RoundedSalary(self.round_to_cents())
    }
}

/// Raw rendering: every stored fractional digit, trailing zeros trimmed, at least one kept.
impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = format!("{:0width$}", self.frac, width = SALARY_MAX_SCALE as usize);
        let frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            write!(f, "{}.0", self.whole)
        } else {
            write!(f, "{}.{frac}", self.whole)
        }
    }
}

/// Two-place rendering of a [`Salary`], produced by [`Salary::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedSalary(Salary);

impl fmt::Display for RoundedSalary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0.whole;
        match self.0.frac / FRAC_PER_CENT {
            0 => write!(f, "{whole}"),
            c if c % 10 == 0 => write!(f, "{whole}.{}", c / 10),
            c => write!(f, "{whole}.{c:02}"),
        }
    }
}

/// Reason a salary string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSalaryError {
    #[error("empty salary")]
    Empty,
    #[error("expected a non-negative decimal number")]
    InvalidDigit,
    #[error("more than {} significant fractional digits", SALARY_MAX_SCALE)]
    TooPrecise,
    #[error("salary out of range")]
    Overflow,
}

impl FromStr for Salary {
    type Err = ParseSalaryError;

    /// Accepts `digits`, `digits.digits`, `.digits` and `digits.`. Trailing fractional zeros do
    /// not count towards [`SALARY_MAX_SCALE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseSalaryError::Empty);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(ParseSalaryError::InvalidDigit);
        }
        let frac = frac.trim_end_matches('0');
        if frac.len() > SALARY_MAX_SCALE as usize {
            return Err(ParseSalaryError::TooPrecise);
        }

        let whole = if whole.is_empty() {
            0
        } else {
            whole.parse::<u64>().map_err(|_| ParseSalaryError::Overflow)?
        };
        let frac = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(SALARY_MAX_SCALE as usize)
            .fold(0u128, |acc, b| acc * 10 + u128::from(b - b'0'));

        Ok(Salary { whole, frac })
    }
}

/// Exact running total of salaries, used for averaging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalarySum {
    whole: u128,
    frac: u128,
    count: u128,
}

impl SalarySum {
    /// Add one salary to the total.
    pub fn include(mut self, salary: Salary) -> Self {
        self.whole += u128::from(salary.whole);
        self.frac += salary.frac;
        if self.frac >= FRAC_ONE {
            self.frac -= FRAC_ONE;
            self.whole += 1;
        }
        self.count += 1;
        self
    }

    /// Number of salaries added.
    pub fn count(&self) -> u128 {
        self.count
    }

    /// Mean rounded half-even to cents in a single step, or `None` when nothing was added.
    pub fn mean_to_cents(&self) -> Option<Salary> {
        let n = self.count;
        if n == 0 {
            return None;
        }
        // total * 100 == cents + sub_cent / FRAC_PER_CENT
        let cents = self.whole * 100 + self.frac / FRAC_PER_CENT;
        let sub_cent = self.frac % FRAC_PER_CENT;
        let (q, r) = (cents / n, cents % n);

        // Compare the leftover (r + sub_cent / FRAC_PER_CENT) / n with one half.
        let twice_sub = 2 * sub_cent;
        let half = (2 * r + twice_sub / FRAC_PER_CENT)
            .cmp(&n)
            .then((twice_sub % FRAC_PER_CENT).cmp(&0));
        Some(Salary::from_cents(round_half_even(q, half)))
    }
}

/// `q` adjusted for a discarded remainder that compares to one half as `half`; ties go to even.
fn round_half_even(q: u128, half: Ordering) -> u128 {
    match half {
        Ordering::Less => q,
        Ordering::Greater => q + 1,
        Ordering::Equal => q + q % 2,
    }
}

/// A single employee record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub department: String,
    pub salary: Salary,
}

impl Employee {
    /// Create a new record.
    pub fn new(name: impl Into<String>, age: u32, department: impl Into<String>, salary: Salary) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
            salary,
        }
    }
}

/// Ordered, read-only sequence of [`Employee`] records.
///
/// Order follows the source. Views that re-order (see [`crate::processing::sort`]) return new
/// sequences and leave the roster untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<Employee>,
}

impl Roster {
    /// Create a roster from records, keeping their order.
    pub fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.records.iter()
    }

    /// Borrow the records matching `predicate`, preserving order.
    pub fn filter_records<F>(&self, mut predicate: F) -> Vec<&Employee>
    where
        F: FnMut(&Employee) -> bool,
    {
        self.records.iter().filter(|e| predicate(e)).collect()
    }

    /// Apply `mapper` to every record, preserving order and cardinality.
    pub fn map_records<T, F>(&self, mapper: F) -> Vec<T>
    where
        F: FnMut(&Employee) -> T,
    {
        self.records.iter().map(mapper).collect()
    }

    /// Fold all records into an accumulator.
    pub fn reduce_records<A, F>(&self, init: A, reducer: F) -> A
    where
        F: FnMut(A, &Employee) -> A,
    {
        self.records.iter().fold(init, reducer)
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
