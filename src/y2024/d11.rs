use {
    crate::*,
    nom::{
        bytes::complete::tag,
        combinator::map,
        error::Error,
        multi::separated_list1,
        Err, IResult,
    },
    std::collections::HashMap,
};

/* --- Day 11: Plutonian Pebbles ---

Engraved stones rewritten on every blink: 0 becomes 1, an even-digit number splits in half, and
anything else is multiplied by 2024. Order never matters, so only the multiset of values is
tracked. Part one counts stones after 25 blinks, part two after 75. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u64>);

impl Solution {
    const Q1_BLINKS: usize = 25_usize;
    const Q2_BLINKS: usize = 75_usize;

    fn blinked_counts(counts: HashMap<u64, u64>) -> HashMap<u64, u64> {
        let mut blinked_counts: HashMap<u64, u64> = HashMap::with_capacity(counts.len());

        for (stone, count) in counts {
            let digits: u32 = decimal_digits(stone);

            if stone == 0_u64 {
                *blinked_counts.entry(1_u64).or_default() += count;
            } else if digits % 2_u32 == 0_u32 {
                let half_pow: u64 = 10_u64.pow(digits / 2_u32);

                *blinked_counts.entry(stone / half_pow).or_default() += count;
                *blinked_counts.entry(stone % half_pow).or_default() += count;
            } else {
                *blinked_counts.entry(stone * 2024_u64).or_default() += count;
            }
        }

        blinked_counts
    }

    fn stone_count_after(&self, blinks: usize) -> u64 {
        let mut counts: HashMap<u64, u64> = HashMap::new();

        for &stone in &self.0 {
            *counts.entry(stone).or_default() += 1_u64;
        }

        for _ in 0_usize..blinks {
            counts = Self::blinked_counts(counts);
        }

        counts.values().sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(separated_list1(tag(" "), parse_integer), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.stone_count_after(Self::Q1_BLINKS));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.stone_count_after(Self::Q2_BLINKS));
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
