use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{separated_pair, terminated},
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 1: Historian Hysteria ---

Two lists of location IDs, side by side. Part one pairs them up smallest-to-smallest and sums the
pairwise distances. Part two sums each left ID times its number of occurrences in the right
list. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct IdPair {
    left: i32,
    right: i32,
}

impl Parse for IdPair {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer, tag("   "), parse_integer),
            |(left, right)| Self { left, right },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<IdPair>);

impl Solution {
    fn sorted_lists(&self) -> (Vec<i32>, Vec<i32>) {
        let mut left: Vec<i32> = self.0.iter().map(|pair| pair.left).collect();
        let mut right: Vec<i32> = self.0.iter().map(|pair| pair.right).collect();

        left.sort();
        right.sort();

        (left, right)
    }

    fn total_distance(&self) -> i32 {
        let (left, right): (Vec<i32>, Vec<i32>) = self.sorted_lists();

        left.into_iter()
            .zip(right)
            .map(|(left, right)| (left - right).abs())
            .sum()
    }

    fn similarity_score(&self) -> i32 {
        let mut right_counts: HashMap<i32, i32> = HashMap::new();

        for pair in &self.0 {
            *right_counts.entry(pair.right).or_default() += 1_i32;
        }

        self.0
            .iter()
            .map(|pair| pair.left * right_counts.get(&pair.left).copied().unwrap_or_default())
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(IdPair::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.total_distance());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.similarity_score());
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
        3   4\n\
        4   3\n\
        2   5\n\
        1   3\n\
        3   9\n\
        3   3\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(
                [
                    (3_i32, 4_i32),
                    (4_i32, 3_i32),
                    (2_i32, 5_i32),
                    (1_i32, 3_i32),
                    (3_i32, 9_i32),
                    (3_i32, 3_i32),
                ]
                .into_iter()
                .map(|(left, right)| IdPair { left, right })
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
    fn test_total_distance() {
        for (index, total_distance) in [11_i32].into_iter().enumerate() {
            assert_eq!(solution(index).total_distance(), total_distance);
        }
    }

    #[test]
    fn test_similarity_score() {
        for (index, similarity_score) in [31_i32].into_iter().enumerate() {
            assert_eq!(solution(index).similarity_score(), similarity_score);
        }
    }
}
