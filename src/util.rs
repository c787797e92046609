pub use {clap::Parser, graph::*, grid::*};

use {
    clap::value_parser,
    memmap::Mmap,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map_res, opt, recognize},
        sequence::tuple,
        IResult,
    },
    std::{
        fmt::Debug,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
        time::{Duration, Instant},
    },
};

mod graph;
mod grid;

#[derive(Debug, Parser)]
pub struct QuestionArgs {
    /// Print extra information, if there is any
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
pub struct Args {
    /// Input file path, `input/d<day>.txt` if omitted
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// The day to run
    #[arg(short, long, value_parser = value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// The question to run, both if omitted
    #[arg(short, long, default_value_t, value_parser = value_parser!(u8).range(0..=2))]
    pub question: u8,

    #[command(flatten)]
    pub question_args: QuestionArgs,
}

impl Args {
    fn try_to_solution<S>(&self) -> Option<S>
    where
        S: for<'i> TryFrom<&'i str>,
        for<'i> <S as TryFrom<&'i str>>::Error: Debug,
    {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = format!("input/d{}.txt", self.day);

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: Nothing should be modifying the input file while the view over it is alive.
        unsafe {
            open_utf8_file(file_path, |input| {
                input
                    .try_into()
                    .map_err(|error| {
                        eprintln!("Failed to parse input file \"{file_path}\":\n{error:#?}");
                    })
                    .ok()
            })
        }
        .unwrap_or_else(|error| {
            eprintln!("Failed to open input file \"{file_path}\":\n{error}");

            None
        })
    }
}

/// Renders a duration for question reporting: fractional milliseconds below one second, seconds
/// below one minute, and minutes beyond that.
pub fn format_duration(duration: Duration) -> String {
    const MILLIS_PER_SEC: f64 = 1.0e3_f64;
    const MILLIS_PER_MIN: f64 = 60.0e3_f64;

    let millis: f64 = duration.as_secs_f64() * MILLIS_PER_SEC;

    if millis < MILLIS_PER_SEC {
        format!("{millis:.2} ms")
    } else if millis < MILLIS_PER_MIN {
        format!("{:.2} s", millis / MILLIS_PER_SEC)
    } else {
        format!("{:.2} min", millis / MILLIS_PER_MIN)
    }
}

fn time_question<F: FnOnce()>(question: u8, f: F) {
    let start: Instant = Instant::now();

    f();

    eprintln!("q{question}: {}", format_duration(start.elapsed()));
}

pub trait RunQuestions
where
    Self: Sized + for<'i> TryFrom<&'i str>,
    for<'i> <Self as TryFrom<&'i str>>::Error: Debug,
{
    fn q1_internal(&mut self, args: &QuestionArgs);
    fn q2_internal(&mut self, args: &QuestionArgs);

    fn q1(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            time_question(1_u8, || solution.q1_internal(&args.question_args));
        }
    }

    fn q2(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            time_question(2_u8, || solution.q2_internal(&args.question_args));
        }
    }

    fn both(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            time_question(1_u8, || solution.q1_internal(&args.question_args));
            time_question(2_u8, || solution.q2_internal(&args.question_args));
        }
    }
}

#[derive(Clone)]
pub struct Day {
    pub q1: fn(&Args),
    pub q2: fn(&Args),
    pub both: fn(&Args),
}

impl Day {
    fn run(&self, args: &Args) {
        match args.question {
            0_u8 => (self.both)(args),
            1_u8 => (self.q1)(args),
            2_u8 => (self.q2)(args),
            question => unreachable!(
                "A valid Args will have a question value in the range 0..=2, but {question} was \
                encountered.\n\
                Args:\n\
                {args:#?}"
            ),
        }
    }
}

#[derive(Default)]
pub struct Solutions {
    days: Vec<Option<Day>>,
    min_day: u8,
}

impl Solutions {
    pub fn run(&self, args: &Args) {
        match args
            .day
            .checked_sub(self.min_day)
            .and_then(|day_index| self.days.get(day_index as usize))
        {
            Some(Some(day)) => day.run(args),
            _ => eprintln!("Day {} has no registered questions.", args.day),
        }
    }

    /// Builds a registry from `("d<N>", Day)` pairs, as produced by the `solutions!` macro.
    pub fn try_from_labeled_days(labeled_days: Vec<(&str, Day)>) -> Option<Self> {
        let mut numbered_days: Vec<(u8, Day)> = Vec::with_capacity(labeled_days.len());

        for (label, day) in labeled_days {
            match label
                .strip_prefix('d')
                .and_then(|number| number.parse::<u8>().ok())
            {
                Some(number) => numbered_days.push((number, day)),
                None => {
                    eprintln!("Invalid day module label \"{label}\"");

                    return None;
                }
            }
        }

        let min_day: u8 = numbered_days.iter().map(|(number, _)| *number).min()?;
        let max_day: u8 = numbered_days.iter().map(|(number, _)| *number).max()?;

        let mut days: Vec<Option<Day>> = Vec::new();

        days.resize_with((max_day + 1_u8 - min_day) as usize, || None);

        for (number, day) in numbered_days {
            days[(number - min_day) as usize] = Some(day);
        }

        Some(Self { days, min_day })
    }
}

#[macro_export]
macro_rules! solutions {
    [ $year:ident, [ $( $day:ident ),* $(,)? ] ] => {
        pub mod $year {
            $(
                pub mod $day;
            )*
        }

        pub fn solutions() -> &'static $crate::Solutions {
            static ONCE_LOCK: ::std::sync::OnceLock<$crate::Solutions> =
                ::std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| {
                $crate::Solutions::try_from_labeled_days(vec![ $(
                    (
                        stringify!($day),
                        $crate::Day {
                            q1: <$year::$day::Solution as $crate::RunQuestions>::q1,
                            q2: <$year::$day::Solution as $crate::RunQuestions>::q2,
                            both: <$year::$day::Solution as $crate::RunQuestions>::both,
                        },
                    ),
                )* ]).unwrap_or_default()
            })
        }
    };
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str` over the file
/// contents to a provided callback.
///
/// # Safety
///
/// `Mmap::map` is unsafe: there is no guarantee another process won't modify the file while the
/// mapping is alive. Callers accept that risk for the duration of `f`.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: See function-level comment.
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}

pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

pub fn parse_integer<'i, I: FromStr>(input: &'i str) -> IResult<&'i str, I> {
    map_res(
        recognize(tuple((opt(alt((tag("-"), tag("+")))), digit1))),
        I::from_str,
    )(input)
}

pub const fn decimal_digits(value: u64) -> u32 {
    if value == 0_u64 {
        1_u32
    } else {
        value.ilog10() + 1_u32
    }
}

#[macro_export]
macro_rules! define_cell {
    {
        #[repr(u8)]
        $( #[$attr:meta] )*
        $vis:vis enum $cell:ident { $(
            $( #[$variant_attr:meta] )*
            $variant:ident = $variant_const:ident = $variant_u8:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $( #[$attr] )*
        $vis enum $cell { $(
            $( #[$variant_attr] )*
            $variant = Self::$variant_const,
        )* }

        impl $cell {
            $(
                const $variant_const: u8 = $variant_u8;
            )*
        }

        impl $crate::Parse for $cell {
            fn parse<'i>(input: &'i str) -> ::nom::IResult<&'i str, Self> {
                ::nom::combinator::map_opt(
                    ::nom::character::complete::anychar,
                    |value: char| Self::try_from(value).ok(),
                )(input)
            }
        }

        impl From<$cell> for char {
            fn from(value: $cell) -> Self {
                value as u8 as char
            }
        }

        impl TryFrom<u8> for $cell {
            type Error = ();

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $(
                        Self::$variant_const => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                u8::try_from(value).map_err(|_| ())?.try_into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(1_500_u64)), "1.50 ms");
        assert_eq!(format_duration(Duration::from_millis(2_500_u64)), "2.50 s");
        assert_eq!(format_duration(Duration::from_secs(90_u64)), "1.50 min");
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<i32>("-17 4"), Ok((" 4", -17_i32)));
        assert_eq!(parse_integer::<u64>("240"), Ok(("", 240_u64)));
        assert!(parse_integer::<u8>("-1").is_err());
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0_u64), 1_u32);
        assert_eq!(decimal_digits(9_u64), 1_u32);
        assert_eq!(decimal_digits(10_u64), 2_u32);
        assert_eq!(decimal_digits(2024_u64), 4_u32);
    }
}
