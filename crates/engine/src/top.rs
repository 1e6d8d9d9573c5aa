//! Top-student resolution
//!
//! Picks the students with the best average mark. Students without marks
//! have no average and never win. Among students sharing the best average,
//! only those with the most marks remain; every student tied on both counts
//! is a winner.
//!
//! Averages are compared exactly, by cross-multiplying integer sums and
//! counts, so `[4, 4, 4]` and `[3, 5]` tie where floating point might not.

use roster_core::Student;
use std::cmp::Ordering;
use std::fmt;

/// Average mark kept as an exact `sum / count` fraction
#[derive(Debug, Clone, Copy)]
pub struct MeanMark {
    sum: i64,
    count: u64,
}

impl MeanMark {
    /// Average of a student's marks, `None` when there are none
    pub fn of(student: &Student) -> Option<Self> {
        let count = student.mark_count() as u64;
        if count == 0 {
            return None;
        }
        Some(Self {
            sum: student.mark_sum(),
            count,
        })
    }

    /// Number of marks averaged
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Approximate value, for display only
    pub fn as_f64(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

impl Ord for MeanMark {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = i128::from(self.sum) * i128::from(other.count);
        let rhs = i128::from(other.sum) * i128::from(self.count);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for MeanMark {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MeanMark {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MeanMark {}

impl fmt::Display for MeanMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

/// Select the winner set from `students`
///
/// Winners keep the input order. The result is empty when no student has
/// any marks, including when `students` is empty.
pub fn top_students<'a, I>(students: I) -> Vec<Student>
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut best: Option<(MeanMark, usize)> = None;
    let mut winners: Vec<&Student> = Vec::new();

    for student in students {
        let Some(mean) = MeanMark::of(student) else {
            continue;
        };
        let rank = (mean, student.mark_count());
        match best.as_ref().map(|b| rank.cmp(b)) {
            None | Some(Ordering::Greater) => {
                best = Some(rank);
                winners.clear();
                winners.push(student);
            }
            Some(Ordering::Equal) => winners.push(student),
            Some(Ordering::Less) => {}
        }
    }

    winners.into_iter().cloned().collect()
}
