use {
    crate::*,
    glam::IVec2,
    nom::{combinator::map, error::Error, Err, IResult},
};

/* --- Day 4: Ceres Search ---

A word search. Part one counts every occurrence of XMAS, in all eight directions. Part two counts
X-shaped pairs of diagonal MAS words crossing on the A. */

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum Letter {
        X = X_U8 = b'X',
        M = M_U8 = b'M',
        A = A_U8 = b'A',
        S = S_U8 = b'S',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Grid2D<Letter>);

impl Solution {
    const WORD: [Letter; 4_usize] = [Letter::X, Letter::M, Letter::A, Letter::S];

    fn iter_all_deltas() -> impl Iterator<Item = IVec2> {
        (-1_i32..=1_i32)
            .flat_map(|y| (-1_i32..=1_i32).map(move |x| IVec2::new(x, y)))
            .filter(|delta| *delta != IVec2::ZERO)
    }

    fn word_count(&self) -> usize {
        self.0
            .iter_positions()
            .filter(|&pos| self.0.get(pos).copied() == Some(Self::WORD[0_usize]))
            .map(|pos| {
                Self::iter_all_deltas()
                    .filter(|&delta| {
                        (1_i32..Self::WORD.len() as i32).all(|step| {
                            self.0.get(pos + delta * step).copied()
                                == Some(Self::WORD[step as usize])
                        })
                    })
                    .count()
            })
            .sum()
    }

    fn cross_count(&self) -> usize {
        const DIAGONALS: [IVec2; 2_usize] = [IVec2::new(1_i32, 1_i32), IVec2::new(1_i32, -1_i32)];

        self.0
            .iter_positions()
            .filter(|&pos| {
                self.0.get(pos).copied() == Some(Letter::A)
                    && DIAGONALS.into_iter().all(|delta| {
                        matches!(
                            (
                                self.0.get(pos - delta).copied(),
                                self.0.get(pos + delta).copied()
                            ),
                            (Some(Letter::M), Some(Letter::S))
                                | (Some(Letter::S), Some(Letter::M))
                        )
                    })
            })
            .count()
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(Grid2D::parse, Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.word_count());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.cross_count());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
