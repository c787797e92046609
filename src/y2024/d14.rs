use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        character::complete::line_ending,
        combinator::{map, opt},
        error::Error,
        multi::many0,
        sequence::{terminated, tuple},
        Err, IResult,
    },
    std::collections::HashSet,
};

/* --- Day 14: Restroom Redoubt ---

Robots on a wrapping grid, each with a position and velocity. Part one multiplies the quadrant
robot counts after 100 steps. Part two finds the first step at which the robots draw a Christmas
tree; the tree's frame contains a long diagonal line, which is what gets detected. */

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Robot {
    pos: IVec2,
    vel: IVec2,
}

impl Robot {
    fn position_after(&self, steps: i32, dimensions: IVec2) -> IVec2 {
        IVec2::new(
            (self.pos.x + self.vel.x * steps).rem_euclid(dimensions.x),
            (self.pos.y + self.vel.y * steps).rem_euclid(dimensions.y),
        )
    }
}

impl Parse for Robot {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                tag("p="),
                parse_integer::<i32>,
                tag(","),
                parse_integer::<i32>,
                tag(" v="),
                parse_integer::<i32>,
                tag(","),
                parse_integer::<i32>,
            )),
            |(_, px, _, py, _, vx, _, vy)| Self {
                pos: IVec2::new(px, py),
                vel: IVec2::new(vx, vy),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Robot>);

impl Solution {
    const DIMENSIONS: IVec2 = IVec2::new(101_i32, 103_i32);
    const SAFETY_FACTOR_STEPS: i32 = 100_i32;
    const DIAGONAL_RUN_LEN: i32 = 10_i32;

    fn safety_factor(&self, steps: i32, dimensions: IVec2) -> usize {
        let middle: IVec2 = dimensions / 2_i32;
        let mut quadrant_counts: [usize; 4_usize] = [0_usize; 4_usize];

        for robot in &self.0 {
            let pos: IVec2 = robot.position_after(steps, dimensions);

            if pos.x != middle.x && pos.y != middle.y {
                quadrant_counts[((pos.x > middle.x) as usize) << 1_u32
                    | (pos.y > middle.y) as usize] += 1_usize;
            }
        }

        quadrant_counts.into_iter().product()
    }

    fn has_long_diagonal_run(positions: &HashSet<IVec2>, dimensions: IVec2) -> bool {
        positions.iter().any(|&start| {
            (1_i32..Self::DIAGONAL_RUN_LEN).all(|step| {
                positions.contains(&IVec2::new(
                    (start.x + step).rem_euclid(dimensions.x),
                    (start.y + step).rem_euclid(dimensions.y),
                ))
            })
        })
    }

    fn positions_after(&self, steps: i32, dimensions: IVec2) -> HashSet<IVec2> {
        self.0
            .iter()
            .map(|robot| robot.position_after(steps, dimensions))
            .collect()
    }

    /// Robot positions repeat with period `width * height`, so the search is bounded.
    fn easter_egg_step(&self, dimensions: IVec2) -> Option<i32> {
        (1_i32..=dimensions.x * dimensions.y).find(|&steps| {
            Self::has_long_diagonal_run(&self.positions_after(steps, dimensions), dimensions)
        })
    }

    fn grid_string(&self, steps: i32, dimensions: IVec2) -> String {
        let positions: HashSet<IVec2> = self.positions_after(steps, dimensions);
        let mut string: String =
            String::with_capacity(((dimensions.x + 1_i32) * dimensions.y) as usize);

        for y in 0_i32..dimensions.y {
            for x in 0_i32..dimensions.x {
                string.push(if positions.contains(&IVec2::new(x, y)) {
                    '#'
                } else {
                    '.'
                });
            }

            string.push('\n');
        }

        string
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(many0(terminated(Robot::parse, opt(line_ending))), Self)(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.safety_factor(Self::SAFETY_FACTOR_STEPS, Self::DIMENSIONS));
    }

    fn q2_internal(&mut self, args: &QuestionArgs) {
        let easter_egg_step: Option<i32> = self.easter_egg_step(Self::DIMENSIONS);

        dbg!(easter_egg_step);

        if args.verbose {
            if let Some(steps) = easter_egg_step {
                println!("{}", self.grid_string(steps, Self::DIMENSIONS));
            }
        }
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
