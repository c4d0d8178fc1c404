use std::{fmt, io::Write};

use log::trace;

/// First counter value printed
pub const FIRST: u32 = 1;
/// Last counter value printed (inclusive)
pub const LAST: u32 = 20;

/// Suffix written after a counter value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Annotation {
    /// Not divisible by 3 or 5, nothing follows the number
    Plain,
    /// Divisible by 3 only
    Fizz,
    /// Divisible by 5 only
    Buzz,
    /// Divisible by both 3 and 5
    FizzBuzz,
}

impl Annotation {
    pub fn for_counter(i: u32) -> Annotation {
        // Divisible by both is checked first
        if i % 15 == 0 {
            Annotation::FizzBuzz
        } else if i % 3 == 0 {
            Annotation::Fizz
        } else if i % 5 == 0 {
            Annotation::Buzz
        } else {
            Annotation::Plain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Annotation::Plain => "",
            Annotation::Fizz => "fizz",
            Annotation::Buzz => "buzz",
            Annotation::FizzBuzz => "fizzbuzz",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write one line for counter `i`: its decimal value, a space, then the annotation
///
/// The space is written even when the annotation is empty.
pub fn write_line<W: Write>(out: &mut W, i: u32) -> std::io::Result<()> {
    let annotation = Annotation::for_counter(i);
    trace!("Counter: {} {:?}", i, annotation);
    writeln!(out, "{} {}", i, annotation)
}

/// Write every line from `FIRST` to `LAST` in ascending order
pub fn write_sequence<W: Write>(out: &mut W) -> std::io::Result<()> {
    for i in FIRST..=LAST {
        write_line(out, i)?;
    }
    out.flush()
}
