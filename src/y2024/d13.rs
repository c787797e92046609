use {
    crate::*,
    glam::I64Vec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{terminated, tuple},
        Err, IResult,
    },
};

/* --- Day 13: Claw Contraption ---

Claw machines where button A costs 3 tokens, button B costs 1, and each button moves the claw by
a fixed vector. Each machine is a 2x2 integer linear system, solvable by Cramer's rule with
divisibility checks. Part two offsets every prize coordinate by ten trillion. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ClawMachine {
    a: I64Vec2,
    b: I64Vec2,
    prize: I64Vec2,
}

impl ClawMachine {
    fn min_tokens(&self, offset: i64) -> Option<i64> {
        const A_COST: i64 = 3_i64;
        const B_COST: i64 = 1_i64;

        let prize: I64Vec2 = self.prize + I64Vec2::splat(offset);
        let det: i64 = self.a.x * self.b.y - self.a.y * self.b.x;

        if det == 0_i64 {
            return None;
        }

        let a_numer: i64 = prize.x * self.b.y - prize.y * self.b.x;
        let b_numer: i64 = self.a.x * prize.y - self.a.y * prize.x;

        (a_numer % det == 0_i64 && b_numer % det == 0_i64)
            .then(|| {
                let a_presses: i64 = a_numer / det;
                let b_presses: i64 = b_numer / det;

                (a_presses >= 0_i64 && b_presses >= 0_i64)
                    .then_some(A_COST * a_presses + B_COST * b_presses)
            })
            .flatten()
    }
}

impl Parse for ClawMachine {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                tag("Button A: X+"),
                parse_integer::<i64>,
                tag(", Y+"),
                parse_integer::<i64>,
                line_ending,
                tag("Button B: X+"),
                parse_integer::<i64>,
                tag(", Y+"),
                parse_integer::<i64>,
                line_ending,
                tag("Prize: X="),
                parse_integer::<i64>,
                tag(", Y="),
                parse_integer::<i64>,
            )),
            |(_, ax, _, ay, _, _, bx, _, by, _, _, px, _, py)| Self {
                a: I64Vec2::new(ax, ay),
                b: I64Vec2::new(bx, by),
                prize: I64Vec2::new(px, py),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ClawMachine>);

impl Solution {
    const PRIZE_OFFSET: i64 = 10_000_000_000_000_i64;

    fn token_sum(&self, offset: i64) -> i64 {
        self.0
            .iter()
            .filter_map(|claw_machine| claw_machine.min_tokens(offset))
            .sum()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many0(terminated(
                ClawMachine::parse,
                tuple((opt(line_ending), opt(line_ending))),
            )),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.token_sum(0_i64));
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.token_sum(Self::PRIZE_OFFSET));
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
        Button A: X+94, Y+34\n\
        Button B: X+22, Y+67\n\
        Prize: X=8400, Y=5400\n\
        \n\
        Button A: X+26, Y+66\n\
        Button B: X+67, Y+21\n\
        Prize: X=12748, Y=12176\n\
        \n\
        Button A: X+17, Y+86\n\
        Button B: X+84, Y+37\n\
        Prize: X=7870, Y=6450\n\
        \n\
        Button A: X+69, Y+23\n\
        Button B: X+27, Y+71\n\
        Prize: X=18641, Y=10279\n"];

    fn solution(index: usize) -> &'static Solution {
        static ONCE_LOCK: OnceLock<Vec<Solution>> = OnceLock::new();

        &ONCE_LOCK.get_or_init(|| {
            vec![Solution(
                [
                    ((94, 34), (22, 67), (8400, 5400)),
                    ((26, 66), (67, 21), (12748, 12176)),
                    ((17, 86), (84, 37), (7870, 6450)),
                    ((69, 23), (27, 71), (18641, 10279)),
                ]
                .into_iter()
                .map(|((ax, ay), (bx, by), (px, py))| ClawMachine {
                    a: I64Vec2::new(ax, ay),
                    b: I64Vec2::new(bx, by),
                    prize: I64Vec2::new(px, py),
                })
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
    fn test_min_tokens() {
        for (machine_index, min_tokens) in
            [Some(280_i64), None, Some(200_i64), None].into_iter().enumerate()
        {
            assert_eq!(
                solution(0_usize).0[machine_index].min_tokens(0_i64),
                min_tokens
            );
        }

        // With the offset, only the second and fourth machines are solvable.
        assert!(solution(0_usize).0[0_usize]
            .min_tokens(Solution::PRIZE_OFFSET)
            .is_none());
        assert!(solution(0_usize).0[1_usize]
            .min_tokens(Solution::PRIZE_OFFSET)
            .is_some());
    }

    #[test]
    fn test_token_sum() {
        for (index, token_sum) in [480_i64].into_iter().enumerate() {
            assert_eq!(solution(index).token_sum(0_i64), token_sum);
        }

        for (index, token_sum) in [875318608908_i64].into_iter().enumerate() {
            assert_eq!(
                solution(index).token_sum(Solution::PRIZE_OFFSET),
                token_sum
            );
        }
    }
}
