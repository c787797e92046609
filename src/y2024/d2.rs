use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::terminated,
        Err, IResult,
    },
};

/* --- Day 2: Red-Nosed Reports ---

Each report is a list of levels. A report is safe if the levels are strictly monotonic with
adjacent differences of at most 3. Part two tolerates one bad level: a report also counts if
removing a single level makes it safe. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Report(Vec<i32>);

impl Report {
    fn levels_are_safe(levels: &[i32]) -> bool {
        let mut deltas = levels.windows(2_usize).map(|window| window[1] - window[0]);

        match deltas.next() {
            Some(first_delta) if (1_i32..=3_i32).contains(&first_delta.abs()) => deltas.all(
                |delta| delta.signum() == first_delta.signum() && (1_i32..=3_i32).contains(&delta.abs()),
            ),
            _ => false,
        }
    }

    fn is_safe(&self) -> bool {
        Self::levels_are_safe(&self.0)
    }

    fn is_safe_dampened(&self) -> bool {
        self.is_safe()
            || (0_usize..self.0.len()).any(|skipped_index| {
                let mut levels: Vec<i32> = self.0.clone();

                levels.remove(skipped_index);

                Self::levels_are_safe(&levels)
            })
    }
}

impl Parse for Report {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(" "), parse_integer), Self)(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Report>);

impl Solution {
    fn safe_report_count(&self) -> usize {
        self.0.iter().filter(|report| report.is_safe()).count()
    }

    fn safe_dampened_report_count(&self) -> usize {
        self.0
            .iter()
            .filter(|report| report.is_safe_dampened())
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Report::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safe_report_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safe_dampened_report_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
