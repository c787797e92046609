use {
    crate::*,
    nom::{
        character::complete::satisfy,
        combinator::{map, map_opt},
        error::Error,
        multi::many1,
        Err, IResult,
    },
};

/* --- Day 9: Disk Fragmenter ---

A disk map of alternating file and gap lengths, one digit each. Part one compacts single blocks
from the back into the leftmost gaps and checksums the result. Part two moves whole files, in
decreasing id order, into the leftmost gap that fits. */

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<u8>);

impl Solution {
    fn blocks(&self) -> Vec<Option<u16>> {
        let mut blocks: Vec<Option<u16>> = Vec::new();

        for (digit_index, &len) in self.0.iter().enumerate() {
            let file_id: Option<u16> = (digit_index % 2_usize == 0_usize)
                .then(|| (digit_index / 2_usize) as u16);

            blocks.extend(std::iter::repeat(file_id).take(len as usize));
        }

        blocks
    }

    fn checksum(blocks: &[Option<u16>]) -> u64 {
        blocks
            .iter()
            .enumerate()
            .map(|(block_index, file_id)| {
                file_id.map_or(0_u64, |file_id| block_index as u64 * file_id as u64)
            })
            .sum()
    }

    fn compacted_checksum(&self) -> u64 {
        let mut blocks: Vec<Option<u16>> = self.blocks();
        let mut left: usize = 0_usize;
        let mut right: usize = blocks.len();

        while left < right {
            if blocks[left].is_some() {
                left += 1_usize;
            } else if blocks[right - 1_usize].is_none() {
                right -= 1_usize;
            } else {
                blocks.swap(left, right - 1_usize);
                left += 1_usize;
                right -= 1_usize;
            }
        }

        Self::checksum(&blocks)
    }

    fn whole_file_compacted_checksum(&self) -> u64 {
        let mut blocks: Vec<Option<u16>> = self.blocks();

        // File extents by id, from the digit list.
        let mut files: Vec<(usize, usize)> = Vec::new();
        let mut offset: usize = 0_usize;

        for (digit_index, &len) in self.0.iter().enumerate() {
            if digit_index % 2_usize == 0_usize {
                files.push((offset, len as usize));
            }

            offset += len as usize;
        }

        for (start, len) in files.into_iter().rev() {
            let mut gap_start: usize = 0_usize;

            while gap_start < start {
                if blocks[gap_start].is_some() {
                    gap_start += 1_usize;
                } else {
                    let mut gap_len: usize = 0_usize;

                    while gap_start + gap_len < start && blocks[gap_start + gap_len].is_none() {
                        gap_len += 1_usize;
                    }

                    if gap_len >= len {
                        for block_index in 0_usize..len {
                            let file_block: Option<u16> = blocks[start + block_index].take();

                            blocks[gap_start + block_index] = file_block;
                        }

                        break;
                    }

                    gap_start += gap_len;
                }
            }
        }

        Self::checksum(&blocks)
    }
}

impl Parse for Solution {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            many1(map_opt(satisfy(|c| c.is_ascii_digit()), |c| {
                c.to_digit(10_u32).map(|digit| digit as u8)
            })),
            Self,
        )(input)
    }
}

impl RunQuestions for Solution {
    fn q1_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.compacted_checksum());
    }

    fn q2_internal(&mut self, _args: &QuestionArgs) {
        dbg!(self.whole_file_compacted_checksum());
    }
}

impl<'i> TryFrom<&'i str> for Solution {
    type Error = Err<Error<&'i str>>;

    fn try_from(input: &'i str) -> Result<Self, Self::Error> {
        Ok(Self::parse(input)?.1)
    }
}
