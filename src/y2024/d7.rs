use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::{many0, separated_list1},
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
};

/* --- Day 7: Bridge Repair ---

Calibration equations: a target value and operands combined left-to-right with `+` and `*`
(operator precedence ignored). Part one sums the reachable targets. Part two adds a digit
concatenation operator. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Equation {
    target: u64,
    operands: Vec<u64>,
}

fn concatenated(left: u64, right: u64) -> u64 {
    left * 10_u64.pow(decimal_digits(right)) + right
}

impl Equation {
    /// All three operators are non-decreasing for positive operands, so any partial value past
    /// the target can be pruned.
    fn can_reach(&self, accumulated: u64, operands: &[u64], allow_concat: bool) -> bool {
        if accumulated > self.target {
            false
        } else {
            match operands.split_first() {
                None => accumulated == self.target,
                Some((&operand, remaining_operands)) => {
                    self.can_reach(accumulated + operand, remaining_operands, allow_concat)
                        || self.can_reach(accumulated * operand, remaining_operands, allow_concat)
                        || (allow_concat
                            && self.can_reach(
                                concatenated(accumulated, operand),
                                remaining_operands,
                                allow_concat,
                            ))
                }
            }
        }
    }

    fn is_solvable(&self, allow_concat: bool) -> bool {
        self.operands
            .split_first()
            .map_or(false, |(&first_operand, remaining_operands)| {
                self.can_reach(first_operand, remaining_operands, allow_concat)
            })
    }
}

impl Parse for Equation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer,
                tag(": "),
                separated_list1(tag(" "), parse_integer),
            ),
            |(target, operands)| Self { target, operands },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Equation>);

impl Solution {
    fn calibration_sum(&self, allow_concat: bool) -> u64 {
        self.0
            .par_iter()
            .filter(|equation| equation.is_solvable(allow_concat))
            .map(|equation| equation.target)
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Equation::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.calibration_sum(false));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.calibration_sum(true));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    const SOLUTION_STRS: &'static [&'static str] = &["\
        190: 10 19\n\
        3267: 81 40 27\n\
        83: 17 5\n\
        156: 15 6\n\
        7290: 6 8 6 15\n\
        161011: 16 10 13\n\
        192: 17 8 14\n\
        21037: 9 7 18\n\
        292: 11 6 16 20\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(
                [
                    (190_u64, vec![10_u64, 19_u64]),
                    (3267_u64, vec![81_u64, 40_u64, 27_u64]),
                    (83_u64, vec![17_u64, 5_u64]),
                    (156_u64, vec![15_u64, 6_u64]),
                    (7290_u64, vec![6_u64, 8_u64, 6_u64, 15_u64]),
                    (161011_u64, vec![16_u64, 10_u64, 13_u64]),
                    (192_u64, vec![17_u64, 8_u64, 14_u64]),
                    (21037_u64, vec![9_u64, 7_u64, 18_u64]),
                    (292_u64, vec![11_u64, 6_u64, 16_u64, 20_u64]),
                ]
                .into_iter()
                .map(|(target, operands)| Equation { target, operands })
                .collect(),
            )]
        })[index]
    }

    #[test]
    fn test_try_from_str() {
        for (index, solution_str) in SOLUTION_STRS.iter().copied().enumerate() {
            assert_eq!(
                Solution::try_from(solution_str).as_ref(),
                Ok(solution(index))
            );
        }
    }

    #[test]
    fn test_concatenated() {
        assert_eq!(concatenated(12_u64, 345_u64), 12345_u64);
        assert_eq!(concatenated(6_u64, 8_u64), 68_u64);
        assert_eq!(concatenated(48_u64, 6_u64), 486_u64);
    }

    #[test]
    fn test_is_solvable() {
        for (index, is_solvable_values) in [vec![
            true, true, false, false, false, false, false, false, true,
        ]]
        .into_iter()
        .enumerate()
        {
            assert_eq!(
                solution(index)
                    .0
                    .iter()
                    .map(|equation| equation.is_solvable(false))
                    .collect::<Vec<bool>>(),
                is_solvable_values
            );
        }
    }

    #[test]
    fn test_calibration_sum() {
        for (index, (sum, sum_with_concat)) in
            [(3749_u64, 11387_u64)].into_iter().enumerate()
        {
            assert_eq!(solution(index).calibration_sum(false), sum);
            assert_eq!(solution(index).calibration_sum(true), sum_with_concat);
        }
    }
}
