use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        combinator::map,
        error::Error,
        sequence::{delimited, separated_pair},
        Err, IResult,
    },
};

/* --- Day 3: Mull It Over ---

Corrupted program memory. Part one sums the products of every valid `mul(a,b)` instruction.
Part two also honors `do()` and `don't()` instructions, which enable and disable the
multiplications that follow. */

#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(parse_integer, tag(","), parse_integer),
                    tag(")"),
                ),
                |(left, right)| Self::Mul(left, right),
            ),
            map(tag("don't()"), |_| Self::Dont),
            map(tag("do()"), |_| Self::Do),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Instruction>);

impl Solution {
    fn mul_sum(&self) -> u64 {
        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) => left * right,
                _ => 0_u64,
            })
            .sum()
    }

    fn enabled_mul_sum(&self) -> u64 {
        let mut enabled: bool = true;

        self.0
            .iter()
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) if enabled => left * right,
                Instruction::Do => {
                    enabled = true;

                    0_u64
                }
                Instruction::Dont => {
                    enabled = false;

                    0_u64
                }
                _ => 0_u64,
            })
            .sum()
    }
}

impl Parse for Solution {
    /// Anything that isn't a valid instruction is skipped one byte at a time, so a prefix like
    /// `mul(32,64]` never hides the valid instruction it overlaps.
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let mut instructions: Vec<Instruction> = Vec::new();
        let mut remaining: &'i str = input;

        while !remaining.is_empty() {
            if let Ok((next_input, instruction)) = Instruction::parse(remaining) {
                instructions.push(instruction);
                remaining = next_input;
            } else {
                let mut chars = remaining.chars();

                chars.next();
                remaining = chars.as_str();
            }
        }

        Ok((remaining, Self(instructions)))
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.mul_sum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.enabled_mul_sum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
